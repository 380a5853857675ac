//! Query Input - View Model

use contracts::domain::a002_query::QueryRequest;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct QueryInputVm {
    pub text: RwSignal<String>,
    pub loading: RwSignal<bool>,
}

impl QueryInputVm {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
        }
    }
}

/// Пустой (или из одних пробелов) текст и активный запрос блокируют отправку
pub fn can_submit(text: &str, loading: bool) -> bool {
    !text.trim().is_empty() && !loading
}

/// Запрос для отправки или `None`, если отправлять нечего.
///
/// `top_k` берётся из настроек store; без него подставится 5.
pub fn build_request(text: &str, loading: bool, top_k: Option<u32>) -> Option<QueryRequest> {
    if !can_submit(text, loading) {
        return None;
    }
    Some(QueryRequest::new(text.trim(), top_k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_builds_nothing() {
        assert_eq!(build_request("", false, Some(5)), None);
        assert_eq!(build_request("   \n", false, Some(5)), None);
    }

    #[test]
    fn test_loading_blocks_submit() {
        assert_eq!(build_request("what is rust?", true, Some(5)), None);
        assert!(!can_submit("what is rust?", true));
    }

    #[test]
    fn test_request_uses_settings_top_k() {
        let req = build_request("  capital of France? ", false, Some(8)).unwrap();
        assert_eq!(req.query, "capital of France?");
        assert_eq!(req.top_k, 8);
    }

    #[test]
    fn test_request_defaults_top_k() {
        let req = build_request("q", false, None).unwrap();
        assert_eq!(req.top_k, 5);
    }
}
