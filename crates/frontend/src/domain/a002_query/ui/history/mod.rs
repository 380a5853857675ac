//! История ответов сессии (до 10, свежие сверху)

use crate::layout::global_context::use_app_context;
use crate::shared::format::truncate_chars;
use crate::shared::icons::icon;
use contracts::domain::a002_query::QueryResponse;
use leptos::prelude::*;
use thaw::*;

const LABEL_MAX_CHARS: usize = 60;

/// Подпись записи истории: вопрос, иначе начало ответа, для ошибок — `(error) …`
pub fn history_label(response: &QueryResponse) -> String {
    if let Some(detail) = &response.detail {
        return format!("(error) {}", truncate_chars(detail, LABEL_MAX_CHARS));
    }
    let text = response
        .query
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .or(response.answer.as_deref())
        .unwrap_or("(empty)");
    truncate_chars(text, LABEL_MAX_CHARS)
}

#[component]
#[allow(non_snake_case)]
pub fn QueryHistory() -> impl IntoView {
    let ctx = use_app_context();

    let entries = move || {
        ctx.queries.with(|q| {
            q.history
                .iter()
                .enumerate()
                .map(|(i, r)| (i, history_label(r), r.is_error()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="history">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h4>{icon("history")}" History"</h4>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || ctx.queries.with(|q| q.history.is_empty()))
                    on_click=move |_| ctx.clear_history()
                >
                    "Clear history"
                </Button>
            </Flex>
            {move || {
                let items = entries();
                if items.is_empty() {
                    return view! { <p class="history__empty">"No queries yet"</p> }.into_any();
                }
                view! {
                    <ol class="history__list">
                        {items
                            .into_iter()
                            .map(|(index, label, is_error)| {
                                view! {
                                    <li
                                        class=if is_error { "history__item history__item--error" } else { "history__item" }
                                        on:click=move |_| ctx.select_from_history(index)
                                    >
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_query() {
        let r = QueryResponse {
            query: Some("capital of France?".into()),
            answer: Some("Paris".into()),
            ..Default::default()
        };
        assert_eq!(history_label(&r), "capital of France?");
    }

    #[test]
    fn test_label_falls_back_to_answer() {
        let r = QueryResponse {
            answer: Some("Paris".into()),
            ..Default::default()
        };
        assert_eq!(history_label(&r), "Paris");
        assert_eq!(history_label(&QueryResponse::default()), "(empty)");
    }

    #[test]
    fn test_label_for_error() {
        assert_eq!(
            history_label(&QueryResponse::error("Query failed")),
            "(error) Query failed"
        );
    }
}
