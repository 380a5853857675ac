use contracts::domain::a002_query::aggregate::HISTORY_LIMIT;
use contracts::domain::a002_query::{QueryResponse, QuerySettings, SettingsPatch};
use std::collections::VecDeque;

/// Номер запроса ask, выданный `begin_request`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Срез `queries`: текущий вопрос и ответ, история, настройки.
///
/// Все переходы синхронные; асинхронная работа живёт в виджетах.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueriesState {
    pub current_query: String,
    pub current_response: Option<QueryResponse>,
    pub is_loading: bool,
    /// Самый свежий ответ первым, не больше HISTORY_LIMIT
    pub history: VecDeque<QueryResponse>,
    pub settings: QuerySettings,
    /// Растёт на каждый `clear_current`; поле ввода очищается по нему
    pub input_resets: u64,
    issued_seq: u64,
    applied_seq: u64,
}

impl QueriesState {
    pub fn set_current_query(&mut self, text: impl Into<String>) {
        self.current_query = text.into();
    }

    /// `Some` — текущий ответ и в начало истории; `None` — только сброс текущего
    pub fn set_current_response(&mut self, response: Option<QueryResponse>) {
        if let Some(r) = &response {
            self.history.push_front(r.clone());
            self.history.truncate(HISTORY_LIMIT);
        }
        self.current_response = response;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn clear_current(&mut self) {
        self.current_response = None;
        self.current_query.clear();
        self.input_resets += 1;
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Выдать номер для нового запроса
    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued_seq += 1;
        RequestTicket(self.issued_seq)
    }

    /// Применить ответ, если он не старее уже применённого.
    ///
    /// Возвращает `false` для устаревшего ответа, состояние при этом не меняется.
    pub fn apply_response(&mut self, ticket: RequestTicket, response: QueryResponse) -> bool {
        if ticket.0 < self.applied_seq {
            return false;
        }
        self.applied_seq = ticket.0;
        self.set_current_response(Some(response));
        true
    }

    /// Показать ответ из истории снова, не добавляя его в историю повторно
    pub fn select_from_history(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(r) => {
                self.current_response = Some(r.clone());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(n: usize) -> QueryResponse {
        QueryResponse {
            query: Some(format!("q{n}")),
            answer: Some(format!("a{n}")),
            ..Default::default()
        }
    }

    #[test]
    fn test_history_is_bounded_and_most_recent_first() {
        for n in [1usize, 3, 10, 11, 25] {
            let mut s = QueriesState::default();
            for i in 0..n {
                s.set_current_response(Some(answer(i)));
                assert_eq!(s.history[0], answer(i));
            }
            assert_eq!(s.history.len(), n.min(HISTORY_LIMIT));
            assert_eq!(s.current_response, Some(answer(n - 1)));
        }
    }

    #[test]
    fn test_history_drops_oldest() {
        let mut s = QueriesState::default();
        for i in 0..12 {
            s.set_current_response(Some(answer(i)));
        }
        assert_eq!(s.history.back(), Some(&answer(2)));
    }

    #[test]
    fn test_null_response_keeps_history() {
        let mut s = QueriesState::default();
        s.set_current_response(Some(answer(1)));
        s.set_current_response(Some(answer(2)));
        let before = s.history.clone();

        s.set_current_response(None);
        assert_eq!(s.history, before);
        assert!(s.current_response.is_none());
    }

    #[test]
    fn test_clear_current_resets_query_and_response() {
        let mut s = QueriesState::default();
        s.set_current_query("what?");
        s.set_current_response(Some(answer(1)));
        s.clear_current();
        assert_eq!(s.current_query, "");
        assert!(s.current_response.is_none());
        assert_eq!(s.history.len(), 1);
    }

    #[test]
    fn test_clear_current_signals_input_reset() {
        let mut s = QueriesState::default();
        s.set_current_query("what?");
        s.update_settings(SettingsPatch::top_k(8));
        s.set_current_response(Some(answer(1)));
        assert_eq!(s.input_resets, 0);

        s.clear_current();
        assert_eq!(s.input_resets, 1);
        s.clear_current();
        assert_eq!(s.input_resets, 2);
    }

    #[test]
    fn test_clear_history_keeps_current() {
        let mut s = QueriesState::default();
        s.set_current_response(Some(answer(1)));
        s.clear_history();
        assert!(s.history.is_empty());
        assert_eq!(s.current_response, Some(answer(1)));
    }

    #[test]
    fn test_update_settings_top_k_only() {
        let mut s = QueriesState::default();
        let min_before = s.settings.min_similarity;
        s.update_settings(SettingsPatch::top_k(8));
        assert_eq!(s.settings.top_k, 8);
        assert_eq!(s.settings.min_similarity, min_before);
    }

    #[test]
    fn test_set_loading() {
        let mut s = QueriesState::default();
        s.set_loading(true);
        assert!(s.is_loading);
        s.set_loading(false);
        assert!(!s.is_loading);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut s = QueriesState::default();
        let first = s.begin_request();
        let second = s.begin_request();
        assert!(first < second);

        assert!(s.apply_response(second, answer(2)));
        assert!(!s.apply_response(first, answer(1)));
        assert_eq!(s.current_response, Some(answer(2)));
        assert_eq!(s.history.len(), 1);
    }

    #[test]
    fn test_in_order_responses_both_apply() {
        let mut s = QueriesState::default();
        let first = s.begin_request();
        let second = s.begin_request();
        assert!(s.apply_response(first, answer(1)));
        assert!(s.apply_response(second, answer(2)));
        assert_eq!(s.history.len(), 2);
        assert_eq!(s.current_response, Some(answer(2)));
    }

    #[test]
    fn test_select_from_history() {
        let mut s = QueriesState::default();
        s.set_current_response(Some(answer(1)));
        s.set_current_response(Some(answer(2)));
        assert!(s.select_from_history(1));
        assert_eq!(s.current_response, Some(answer(1)));
        assert_eq!(s.history.len(), 2);
        assert!(!s.select_from_history(5));
    }
}
