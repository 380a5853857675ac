use crate::domain::a001_document::state::DocumentsState;
use crate::domain::a002_query::state::{QueriesState, RequestTicket};
use contracts::domain::a001_document::Document;
use contracts::domain::a002_query::{QueryResponse, QuerySettings, SettingsPatch};
use leptos::prelude::*;

/// Store приложения: два независимых среза поверх чистых reducer'ов.
///
/// Передаётся виджетам через context (`provide_context` в `App`).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub documents: RwSignal<DocumentsState>,
    pub queries: RwSignal<QueriesState>,
    /// Модалка источников открыта
    pub sources_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(DocumentsState::default()),
            queries: RwSignal::new(QueriesState::default()),
            sources_open: RwSignal::new(false),
        }
    }

    // documents

    pub fn set_documents(&self, items: Vec<Document>) {
        self.documents.update(|s| s.set_all(items));
    }

    pub fn add_document(&self, doc: Document) {
        leptos::logging::log!("📄 add_document: id='{}'", doc.id);
        self.documents.update(|s| s.add(doc));
    }

    pub fn remove_document(&self, id: &str) {
        self.documents.update(|s| s.remove(id));
    }

    pub fn clear_documents(&self) {
        self.documents.update(|s| s.clear());
    }

    // queries

    pub fn set_current_query(&self, text: String) {
        self.queries.update(|s| s.set_current_query(text));
    }

    pub fn set_current_response(&self, response: Option<QueryResponse>) {
        self.queries.update(|s| s.set_current_response(response));
    }

    pub fn set_loading(&self, loading: bool) {
        self.queries.update(|s| s.set_loading(loading));
    }

    pub fn clear_current(&self) {
        self.queries.update(|s| s.clear_current());
    }

    pub fn update_settings(&self, patch: SettingsPatch) {
        self.queries.update(|s| s.update_settings(patch));
    }

    pub fn clear_history(&self) {
        self.queries.update(|s| s.clear_history());
    }

    pub fn select_from_history(&self, index: usize) {
        self.queries.update(|s| {
            s.select_from_history(index);
        });
    }

    pub fn begin_request(&self) -> RequestTicket {
        // None только у уничтоженного сигнала
        self.queries
            .try_update(|s| s.begin_request())
            .unwrap_or_default()
    }

    /// Применить ответ ask; устаревший ответ только логируется
    pub fn apply_response(&self, ticket: RequestTicket, response: QueryResponse) {
        let applied = self
            .queries
            .try_update(|s| s.apply_response(ticket, response))
            .unwrap_or(false);
        if !applied {
            log::warn!("dropped stale ask response #{}", ticket.value());
        }
    }

    pub fn settings(&self) -> QuerySettings {
        self.queries.with_untracked(|s| s.settings)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Store из context'а
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
