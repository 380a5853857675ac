use super::chunks::ChunksList;
use super::view_model::{ResponseView, NO_RESPONSE_TEXT};
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Текущий ответ из store: placeholder, ошибка или ответ с чанками
#[component]
#[allow(non_snake_case)]
pub fn QueryResponseView() -> impl IntoView {
    let ctx = use_app_context();

    let view_state =
        Memo::new(move |_| ctx.queries.with(|q| ResponseView::from_response(q.current_response.as_ref())));

    view! {
        <div class="list__query">
            <h4>"Response"</h4>
            {move || match view_state.get() {
                ResponseView::Empty => view! {
                    <div class="placeholder">
                        <p class="response__rejected_message">{NO_RESPONSE_TEXT}</p>
                    </div>
                }
                .into_any(),
                ResponseView::Error { message } => view! {
                    <div class="placeholder error">
                        {icon("alert")}
                        <p class="response__error_message">{message}</p>
                    </div>
                }
                .into_any(),
                ResponseView::Answer { answer, chunks, total_tokens } => view! {
                    <div class="answer">{answer}</div>
                    {total_tokens.map(|t| view! { <div class="answer__tokens">{format!("{} tokens", t)}</div> })}
                    <ChunksList chunks=chunks />
                }
                .into_any(),
                ResponseView::Blank => view! { <></> }.into_any(),
            }}
        </div>
    }
}
