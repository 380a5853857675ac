//! Queries API: ask

use crate::shared::api_utils::{api_url, decode_json, read_response, Decoded};
use contracts::domain::a002_query::{QueryRequest, QueryResponse};
use gloo_net::http::Request;
use thiserror::Error;

pub const QUERY_FAILED: &str = "Query failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Query failed")]
    Transport(String),
    #[error("Query failed")]
    Malformed(String),
}

/// Interpret the ask endpoint's reply. The body is parsed whatever the status.
pub fn decode_ask(status: u16, body: &str) -> Result<QueryResponse, QueryError> {
    match decode_json::<QueryResponse>(status, body) {
        Decoded::Ok(response) => Ok(response),
        Decoded::Rejected { status, message } => Err(QueryError::Rejected {
            status,
            message: message.unwrap_or_else(|| QUERY_FAILED.to_string()),
        }),
        Decoded::Malformed(cause) => Err(QueryError::Malformed(cause)),
    }
}

/// Задать вопрос. Без `top_k` уходит значение по умолчанию (5).
pub async fn ask_query(query: &str, top_k: Option<u32>) -> Result<QueryResponse, QueryError> {
    let payload = QueryRequest::new(query, top_k);
    log::debug!("ask: top_k={} query_len={}", payload.top_k, payload.query.len());

    let response = Request::post(&api_url("/api/queries/ask"))
        .json(&payload)
        .map_err(|e| QueryError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| QueryError::Transport(format!("Failed to send request: {}", e)))?;

    let (status, text) = read_response(response)
        .await
        .map_err(QueryError::Transport)?;
    decode_ask(status, &text)
}
