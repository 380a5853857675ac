//! Documents API: upload, list, delete

use crate::shared::api_utils::{api_url, decode_json, read_response, Decoded};
use contracts::domain::a001_document::{DeleteDocumentResponse, Document};
use gloo_net::http::Request;
use thiserror::Error;

pub const UPLOAD_FAILED: &str = "Upload failed";
pub const LIST_FAILED: &str = "Failed to load documents";
pub const DELETE_FAILED: &str = "Delete failed";

/// Ошибка загрузки документа.
///
/// `Display` всегда даёт текст для пользователя: `detail` сервера
/// либо общий fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Сеть недоступна, CORS и т.п.
    #[error("Upload failed")]
    Transport(String),
    #[error("Upload failed")]
    Malformed(String),
}

/// Ошибка списка/удаления документов
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentsError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{fallback}")]
    Transport { fallback: &'static str, cause: String },
    #[error("{fallback}")]
    Malformed { fallback: &'static str, cause: String },
}

/// Interpret the upload endpoint's reply
pub fn decode_upload(status: u16, body: &str) -> Result<Document, UploadError> {
    match decode_json::<Document>(status, body) {
        Decoded::Ok(doc) => Ok(doc),
        Decoded::Rejected { status, message } => Err(UploadError::Rejected {
            status,
            message: message.unwrap_or_else(|| UPLOAD_FAILED.to_string()),
        }),
        Decoded::Malformed(cause) => Err(UploadError::Malformed(cause)),
    }
}

fn decode_documents<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &'static str,
) -> Result<T, DocumentsError> {
    match decode_json::<T>(status, body) {
        Decoded::Ok(value) => Ok(value),
        Decoded::Rejected { status, message } => Err(DocumentsError::Rejected {
            status,
            message: message.unwrap_or_else(|| fallback.to_string()),
        }),
        Decoded::Malformed(cause) => Err(DocumentsError::Malformed { fallback, cause }),
    }
}

/// URL загрузки; `title` уходит query-параметром
pub fn upload_url(base_url: &str, title: Option<&str>) -> String {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => format!(
            "{}/api/documents/upload?title={}",
            base_url,
            urlencoding::encode(t)
        ),
        None => format!("{}/api/documents/upload", base_url),
    }
}

/// Загрузить файл multipart-формой (поле `file`)
pub async fn upload_document(
    file: web_sys::File,
    title: Option<String>,
) -> Result<Document, UploadError> {
    let url = upload_url(&crate::shared::api_utils::api_base(), title.as_deref());
    let (status, text) = post_form(&url, &file)
        .await
        .map_err(UploadError::Transport)?;
    decode_upload(status, &text)
}

async fn post_form(url: &str, file: &web_sys::File) -> Result<(u16, String), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    let status = resp.status();

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    Ok((status, text))
}

/// Список документов backend'а
pub async fn list_documents() -> Result<Vec<Document>, DocumentsError> {
    let transport = |cause: String| DocumentsError::Transport {
        fallback: LIST_FAILED,
        cause,
    };
    let response = Request::get(&api_url("/api/documents"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| transport(format!("Failed to send request: {}", e)))?;
    let (status, text) = read_response(response).await.map_err(transport)?;
    decode_documents(status, &text, LIST_FAILED)
}

/// Удалить документ на backend
pub async fn delete_document(id: &str) -> Result<DeleteDocumentResponse, DocumentsError> {
    let transport = |cause: String| DocumentsError::Transport {
        fallback: DELETE_FAILED,
        cause,
    };
    let url = api_url(&format!("/api/documents/{}", urlencoding::encode(id)));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| transport(format!("Failed to send request: {}", e)))?;
    let (status, text) = read_response(response).await.map_err(transport)?;
    decode_documents(status, &text, DELETE_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_carries_server_detail() {
        let err = decode_upload(500, r#"{"detail":"disk full"}"#).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(
            err,
            UploadError::Rejected {
                status: 500,
                message: "disk full".into()
            }
        );
    }

    #[test]
    fn test_upload_error_without_detail_uses_fallback() {
        let err = decode_upload(413, "").unwrap_err();
        assert_eq!(err.to_string(), UPLOAD_FAILED);
        let err = decode_upload(400, r#"{"detail":""}"#).unwrap_err();
        assert_eq!(err.to_string(), UPLOAD_FAILED);
    }

    #[test]
    fn test_network_failure_message_is_fallback() {
        let err = UploadError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.to_string(), "Upload failed");
    }

    #[test]
    fn test_upload_success() {
        let doc = decode_upload(200, r#"{"id":"d-1","filename":"notes.md"}"#).unwrap();
        assert_eq!(doc.id, "d-1");
        assert_eq!(doc.filename, "notes.md");
    }

    #[test]
    fn test_upload_success_with_garbage_body() {
        let err = decode_upload(200, "<html></html>").unwrap_err();
        assert!(matches!(err, UploadError::Malformed(_)));
        assert_eq!(err.to_string(), UPLOAD_FAILED);
    }

    #[test]
    fn test_upload_url_encodes_title() {
        assert_eq!(
            upload_url("http://h:8001", Some("Q3 report")),
            "http://h:8001/api/documents/upload?title=Q3%20report"
        );
        assert_eq!(
            upload_url("http://h:8001", Some(" ")),
            "http://h:8001/api/documents/upload"
        );
    }

    #[test]
    fn test_delete_not_found() {
        let err = decode_documents::<DeleteDocumentResponse>(
            404,
            r#"{"detail":"Document not found"}"#,
            DELETE_FAILED,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Document not found");
    }

    #[test]
    fn test_list_transport_fallback() {
        let err = DocumentsError::Transport {
            fallback: LIST_FAILED,
            cause: "offline".into(),
        };
        assert_eq!(err.to_string(), LIST_FAILED);
    }
}
