use crate::domain::a001_document::ui::{DocumentUpload, DocumentsList};
use crate::domain::a002_query::ui::{
    QueryHistory, QueryInput, QueryResponseView, QuerySettingsPanel, SourcesButton, SourcesList,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Store приложения доступен всем виджетам через context
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <Shell
                left=|| view! {
                    <QueryInput />
                    <QueryResponseView />
                    <SourcesButton />
                }.into_any()
                center=|| view! {
                    <h2>"Documents"</h2>
                    <DocumentUpload />
                    <DocumentsList />
                }.into_any()
                right=|| view! {
                    <QuerySettingsPanel />
                    <QueryHistory />
                }.into_any()
            />
            <SourcesList />
        </ConfigProvider>
    }
}
