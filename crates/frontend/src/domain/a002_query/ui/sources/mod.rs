//! Модалка источников ответа.
//!
//! Открытие/закрытие меняет только `sources_open` в store,
//! сами источники остаются в текущем ответе.

use crate::layout::global_context::use_app_context;
use crate::shared::format::format_score;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_query::SourceRef;
use leptos::prelude::*;
use thaw::*;

/// `geo.pdf — chunk 3 — lines 10-24`
pub fn source_label(source: &SourceRef) -> String {
    let mut label = format!("{} — chunk {}", source.filename, source.chunk_index);
    if let Some(lines) = source.lines.as_deref().filter(|l| !l.is_empty()) {
        label.push_str(&format!(" — lines {}", lines));
    }
    label
}

/// Кнопка, открывающая модалку источников
#[component]
#[allow(non_snake_case)]
pub fn SourcesButton() -> impl IntoView {
    let ctx = use_app_context();
    let count = move || {
        ctx.queries.with(|q| {
            q.current_response
                .as_ref()
                .map(|r| r.sources().len())
                .unwrap_or(0)
        })
    };

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| ctx.sources_open.set(true)
        >
            {icon("book-open")}
            {move || format!(" Sources ({})", count())}
        </Button>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SourcesList() -> impl IntoView {
    let ctx = use_app_context();
    let on_close = Callback::new(move |_| ctx.sources_open.set(false));

    let sources = move || {
        ctx.queries.with(|q| {
            q.current_response
                .as_ref()
                .map(|r| r.sources().to_vec())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || ctx.sources_open.get()>
            <Modal title="Sources".to_string() on_close=on_close>
                {move || {
                    let items = sources();
                    if items.is_empty() {
                        return view! { <p class="modal__empty">"No sources for this response"</p> }
                            .into_any();
                    }
                    view! {
                        <ul class="modal__list">
                            {items
                                .into_iter()
                                .map(|src| {
                                    let label = source_label(&src);
                                    let score = src.relevance_score.map(format_score);
                                    let preview = src.content_preview.clone();
                                    view! {
                                        <li class="modal__item">
                                            <strong>{label}</strong>
                                            {score.map(|s| view! { <span class="modal__score">{format!(" ({})", s)}</span> })}
                                            {preview.map(|p| view! { <p class="modal__preview">{p}</p> })}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </Modal>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(lines: Option<&str>) -> SourceRef {
        SourceRef {
            filename: "geo.pdf".into(),
            chunk_index: 3,
            lines: lines.map(str::to_string),
            relevance_score: None,
            content_preview: None,
        }
    }

    #[test]
    fn test_label_without_lines() {
        assert_eq!(source_label(&source(None)), "geo.pdf — chunk 3");
        assert_eq!(source_label(&source(Some(""))), "geo.pdf — chunk 3");
    }

    #[test]
    fn test_label_with_lines() {
        assert_eq!(
            source_label(&source(Some("10-24"))),
            "geo.pdf — chunk 3 — lines 10-24"
        );
    }
}
