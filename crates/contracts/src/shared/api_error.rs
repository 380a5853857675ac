use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Тело ошибки backend (`{"detail": ...}`).
///
/// `detail` обычно строка, но на ошибках валидации запроса backend
/// возвращает массив объектов с полем `msg`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Человекочитаемое сообщение; `None` если его нет или оно пустое
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            _ => None,
        }
    }

    /// Разобрать сырое тело ответа и достать сообщение
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        assert_eq!(
            ApiErrorBody::message_from_body(r#"{"detail":"disk full"}"#),
            Some("disk full".to_string())
        );
    }

    #[test]
    fn test_validation_detail_list() {
        let body = r#"{"detail":[{"loc":["body","query"],"msg":"field required","type":"value_error.missing"},{"msg":"bad top_k"}]}"#;
        assert_eq!(
            ApiErrorBody::message_from_body(body),
            Some("field required; bad top_k".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_detail() {
        assert_eq!(ApiErrorBody::message_from_body(r#"{}"#), None);
        assert_eq!(ApiErrorBody::message_from_body(r#"{"detail":""}"#), None);
        assert_eq!(ApiErrorBody::message_from_body(r#"{"detail":null}"#), None);
        assert_eq!(ApiErrorBody::message_from_body("<html>502</html>"), None);
    }
}
