//! Serde helpers for loosely typed backend payloads

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Принимает id как строку или число, хранит строкой.
///
/// Backend отдаёт UUID документов строкой, а id чанков целым числом.
pub fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// `null` в JSON превращается в значение по умолчанию
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Необязательный массив, из которого молча выбрасываются элементы чужой формы.
///
/// Не-массив (и `null`) даёт `None`, а не ошибку всего payload'а.
pub fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id_as_string")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        size: u64,
    }

    #[test]
    fn test_id_accepts_string_and_number() {
        let a: Probe = serde_json::from_str(r#"{"id":"a1b2","size":3}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(a.id, "a1b2");
        assert_eq!(b.id, "42");
        assert_eq!(b.size, 0);
    }

    #[derive(Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "skip_invalid")]
        items: Option<Vec<u32>>,
    }

    #[test]
    fn test_skip_invalid_keeps_good_items() {
        let l: Listing = serde_json::from_str(r#"{"items":[1,"x",3,null]}"#).unwrap();
        assert_eq!(l.items, Some(vec![1, 3]));

        let l: Listing = serde_json::from_str(r#"{"items":"oops"}"#).unwrap();
        assert!(l.items.is_none());
        let l: Listing = serde_json::from_str(r#"{}"#).unwrap();
        assert!(l.items.is_none());
    }

    #[test]
    fn test_null_becomes_default() {
        let p: Probe = serde_json::from_str(r#"{"id":"x","size":null}"#).unwrap();
        assert_eq!(p.size, 0);
    }
}
