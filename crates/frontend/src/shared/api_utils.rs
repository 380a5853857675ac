//! API utilities for frontend-backend communication
//!
//! Base URL resolution and decoding of raw HTTP responses into typed results.
//! The decoding half is pure so it can be tested off-browser.

use contracts::shared::ApiErrorBody;
use serde::de::DeserializeOwned;

/// Port the RAG backend listens on when no base URL is compiled in
pub const BACKEND_PORT: u16 = 8001;

/// Base URL baked in at build time, e.g. `RAG_API_BASE=https://rag.example.com trunk build`
const COMPILED_API_BASE: Option<&str> = option_env!("RAG_API_BASE");

/// Get the base URL for API requests
///
/// Uses the compiled-in `RAG_API_BASE` when present. Otherwise builds it from
/// the current window location on port 8001.
///
/// # Example
/// ```ignore
/// let url = format!("{}/api/queries/ask", api_base());
/// ```
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    resolve_api_base(COMPILED_API_BASE, &protocol, &hostname)
}

/// Pick the compiled-in base (trailing slashes trimmed) or derive one from the page location
pub fn resolve_api_base(compiled: Option<&str>, protocol: &str, hostname: &str) -> String {
    match compiled.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => {
            let hostname = if hostname.is_empty() { "127.0.0.1" } else { hostname };
            format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
        }
    }
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/" or "/health")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Outcome of decoding one HTTP response
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// 2xx with a body that parsed as `T`
    Ok(T),
    /// Status outside 2xx. `message` is the body's `detail`, when there is one.
    Rejected { status: u16, message: Option<String> },
    /// 2xx, but the body did not parse
    Malformed(String),
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode `status` + raw `body` into a typed result.
///
/// The body is always inspected: on error statuses it is read for `detail`.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Decoded<T> {
    if !is_success(status) {
        return Decoded::Rejected {
            status,
            message: ApiErrorBody::message_from_body(body),
        };
    }
    match serde_json::from_str::<T>(body) {
        Ok(value) => Decoded::Ok(value),
        Err(e) => Decoded::Malformed(format!("Failed to parse response: {}", e)),
    }
}

/// Read status and body text from a gloo-net response
pub async fn read_response(response: gloo_net::http::Response) -> Result<(u16, String), String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    Ok((status, text))
}
