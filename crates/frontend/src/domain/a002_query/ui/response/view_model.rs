//! Query Response - View Model

use crate::shared::format::format_score;
use contracts::domain::a002_query::{Chunk, QueryResponse};

pub const NO_RESPONSE_TEXT: &str = "No response yet. Try entering a query.";

/// Строка списка чанков
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkRow {
    pub id: String,
    pub score: String,
    pub content: String,
    pub source: String,
}

impl From<&Chunk> for ChunkRow {
    fn from(chunk: &Chunk) -> Self {
        Self {
            id: chunk.id.clone(),
            score: format_score(chunk.score),
            content: chunk.content.clone(),
            source: chunk.source.clone(),
        }
    }
}

/// Что показывать для текущего ответа
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
    /// Ответа ещё не было
    Empty,
    /// `detail` задан. Имеет приоритет над `answer`: backend может прислать
    /// оба поля, такой ответ считаем ошибкой.
    Error { message: String },
    Answer {
        answer: String,
        chunks: Vec<ChunkRow>,
        total_tokens: Option<u64>,
    },
    /// Ни ответа, ни ошибки
    Blank,
}

impl ResponseView {
    pub fn from_response(response: Option<&QueryResponse>) -> Self {
        let Some(r) = response else {
            return ResponseView::Empty;
        };
        if let Some(detail) = &r.detail {
            return ResponseView::Error {
                message: detail.clone(),
            };
        }
        match r.answer.as_deref() {
            Some(answer) if !answer.is_empty() => ResponseView::Answer {
                answer: answer.to_string(),
                chunks: r.chunks().iter().map(ChunkRow::from).collect(),
                total_tokens: r.total_tokens,
            },
            _ => ResponseView::Blank,
        }
    }
}
