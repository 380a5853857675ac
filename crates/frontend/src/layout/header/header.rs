use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let has_current = move || {
        ctx.queries
            .with(|q| q.current_response.is_some() || !q.current_query.is_empty())
    };

    view! {
        <header data-zone="header" class="layout__header">
            <div class="header__content">
                <h1 class="header__title">"RAG System"</h1>
                <p class="layout__subtitle">"Document Management & Query Interface"</p>
            </div>
            <div class="header__actions">
                <span class="header__badge">
                    {move || format!("{} docs", ctx.documents.with(|d| d.items.len()))}
                </span>
                <button
                    class="button button--ghost"
                    disabled=move || !has_current()
                    on:click=move |_| {
                        ctx.clear_current();
                        ctx.sources_open.set(false);
                    }
                >
                    "New query"
                </button>
            </div>
        </header>
    }
}
