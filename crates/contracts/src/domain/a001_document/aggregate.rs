use crate::shared::serde_ext::{id_as_string, null_as_default};
use serde::{Deserialize, Serialize};

/// Загруженный документ, как его возвращает backend после upload.
///
/// Живёт только в памяти клиента; на стороне клиента меняется лишь
/// принадлежность списку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_size: u64,
    /// ISO-8601, без часового пояса у текущего backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub uploaded_at: String,
    #[serde(default, alias = "doc_metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Document {
    /// Заголовок для отображения: title, иначе имя файла
    pub fn display_name(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => &self.filename,
        }
    }
}

/// Ответ на `DELETE /api/documents/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
