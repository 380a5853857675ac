use crate::shared::serde_ext::{id_as_string, null_as_default, skip_invalid};
use serde::{Deserialize, Serialize};

/// top_k, если вызывающий его не указал
pub const DEFAULT_TOP_K: u32 = 5;

/// Сколько ответов хранит история
pub const HISTORY_LIMIT: usize = 10;

/// Тело `POST /api/queries/ask`. `top_k` сериализуется всегда.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub top_k: u32,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>, top_k: Option<u32>) -> Self {
        Self {
            query: query.into(),
            top_k: top_k.unwrap_or(DEFAULT_TOP_K),
        }
    }
}

/// Найденный фрагмент документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Релевантность. Старые payload'ы называют поле `similarity`.
    #[serde(
        default,
        alias = "similarity",
        alias = "similarity_score",
        deserialize_with = "null_as_default"
    )]
    pub score: f64,
    /// Имя файла-источника
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
}

/// Ссылка на источник ответа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    #[serde(default, alias = "document", deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chunk_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_preview: Option<String>,
}

impl From<String> for SourceRef {
    fn from(filename: String) -> Self {
        Self {
            filename,
            ..Default::default()
        }
    }
}

/// Источник приходит объектом или просто именем файла
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Name(String),
    Full(SourceRef),
}

fn lenient_sources<'de, D>(deserializer: D) -> Result<Option<Vec<SourceRef>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<RawSource>> = skip_invalid(deserializer)?;
    Ok(raw.map(|items| {
        items
            .into_iter()
            .map(|item| match item {
                RawSource::Name(name) => SourceRef::from(name),
                RawSource::Full(source) => source,
            })
            .collect()
    }))
}

/// Ответ `POST /api/queries/ask`.
///
/// Элементы `chunks`/`sources` чужой формы отбрасываются, ответ целиком не теряется.
///
/// Наличие `detail` означает ошибку, даже если `answer` тоже заполнен.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(
        default,
        deserialize_with = "skip_invalid",
        skip_serializing_if = "Option::is_none"
    )]
    pub chunks: Option<Vec<Chunk>>,
    #[serde(
        default,
        deserialize_with = "lenient_sources",
        skip_serializing_if = "Option::is_none"
    )]
    pub sources: Option<Vec<SourceRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl QueryResponse {
    /// Синтетический ответ с одной ошибкой
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            detail: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.detail.is_some()
    }

    pub fn chunks(&self) -> &[Chunk] {
        self.chunks.as_deref().unwrap_or_default()
    }

    pub fn sources(&self) -> &[SourceRef] {
        self.sources.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_always_carries_top_k() {
        let json = serde_json::to_value(QueryRequest::new("what is rust?", None)).unwrap();
        assert_eq!(json, serde_json::json!({"query": "what is rust?", "top_k": 5}));

        let json = serde_json::to_value(QueryRequest::new("q", Some(12))).unwrap();
        assert_eq!(json["top_k"], 12);
    }

    #[test]
    fn test_parse_backend_answer() {
        let body = r#"{
            "query": "capital of France?",
            "answer": "Paris is the capital.",
            "chunks": [{"id": 17, "content": "Paris ...", "score": 0.92, "source": "geo.pdf"}],
            "sources": [{"document": "geo.pdf", "category": null, "chunk_index": 3,
                         "relevance_score": 0.92, "content_preview": "Paris ..."}],
            "total_tokens": null
        }"#;
        let resp: QueryResponse = serde_json::from_str(body).unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.chunks()[0].id, "17");
        assert_eq!(resp.chunks()[0].score, 0.92);
        assert_eq!(resp.sources()[0].filename, "geo.pdf");
        assert_eq!(resp.sources()[0].chunk_index, 3);
        assert!(resp.sources()[0].lines.is_none());
        assert!(resp.total_tokens.is_none());
    }

    #[test]
    fn test_chunk_without_id_keeps_answer() {
        let body = r#"{"answer":"Paris is the capital.","chunks":[{"content":"x","score":0.9,"source":"geo.pdf"}]}"#;
        let resp: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.answer.as_deref(), Some("Paris is the capital."));
        assert_eq!(resp.chunks().len(), 1);
        assert_eq!(resp.chunks()[0].id, "");
        assert_eq!(resp.chunks()[0].source, "geo.pdf");
    }

    #[test]
    fn test_sources_as_plain_filenames() {
        let body = r#"{"answer":"Paris is the capital.","sources":["geo.pdf"]}"#;
        let resp: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.answer.as_deref(), Some("Paris is the capital."));
        assert_eq!(resp.sources(), &[SourceRef::from("geo.pdf".to_string())]);
    }

    #[test]
    fn test_off_shape_items_are_dropped() {
        let body = r#"{
            "answer": "ok",
            "chunks": [{"id": "c1", "content": "x"}, 42, {"id": "c2", "score": "high"}],
            "sources": [{"document": "a.pdf"}, true, "b.pdf"]
        }"#;
        let resp: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.chunks().len(), 1);
        assert_eq!(resp.chunks()[0].id, "c1");
        let names: Vec<_> = resp.sources().iter().map(|s| s.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_similarity_alias() {
        let chunk: Chunk =
            serde_json::from_str(r#"{"id":"c1","content":"x","similarity":0.5}"#).unwrap();
        assert_eq!(chunk.score, 0.5);
        assert_eq!(chunk.source, "");
    }

    #[test]
    fn test_error_body_is_error_variant() {
        let resp: QueryResponse =
            serde_json::from_str(r#"{"detail":"no documents indexed"}"#).unwrap();
        assert!(resp.is_error());
        assert!(resp.answer.is_none());
        assert!(resp.chunks().is_empty());
        assert_eq!(resp, QueryResponse::error("no documents indexed"));
    }

    #[test]
    fn test_error_serializes_without_empty_fields() {
        let json = serde_json::to_string(&QueryResponse::error("boom")).unwrap();
        assert_eq!(json, r#"{"detail":"boom"}"#);
    }
}
