//! Query Input - View Component

use super::view_model::{build_request, can_submit, QueryInputVm};
use crate::domain::a002_query::api::ask_query;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a002_query::QueryResponse;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn QueryInput() -> impl IntoView {
    let ctx = use_app_context();
    let vm = QueryInputVm::new();

    // "New query" в шапке: очистить и локальный текст
    let resets = Memo::new(move |_| ctx.queries.with(|q| q.input_resets));
    Effect::new(move |prev: Option<u64>| {
        let now = resets.get();
        if prev.is_some_and(|p| p != now) {
            vm.text.set(String::new());
        }
        now
    });

    let handle_submit = Callback::new(move |_: ()| {
        let top_k = ctx.settings().top_k;
        let Some(request) =
            build_request(&vm.text.get_untracked(), vm.loading.get_untracked(), Some(top_k))
        else {
            return;
        };

        vm.loading.set(true);
        ctx.set_loading(true);
        ctx.set_current_query(request.query.clone());
        let ticket = ctx.begin_request();
        log::info!("ask #{} started (top_k={})", ticket.value(), request.top_k);

        wasm_bindgen_futures::spawn_local(async move {
            match ask_query(&request.query, Some(request.top_k)).await {
                Ok(response) => {
                    log::info!("ask #{} finished", ticket.value());
                    ctx.apply_response(ticket, response);
                    vm.text.set(String::new());
                }
                Err(e) => {
                    log::error!("ask #{} failed: {:?}", ticket.value(), e);
                    ctx.apply_response(ticket, QueryResponse::error(e.to_string()));
                }
            }
            vm.loading.set(false);
            ctx.set_loading(false);
        });
    });

    view! {
        <div class="input__block">
            <h2>"Query"</h2>
            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.text
                        placeholder="Ask about your documents… (Ctrl+Enter to send)"
                        attr:style="width: 100%; min-height: 60px; resize: vertical;"
                        disabled=vm.loading
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && ev.ctrl_key() {
                                ev.prevent_default();
                                handle_submit.run(());
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_submit(&vm.text.get(), vm.loading.get()))
                    on_click=move |_| handle_submit.run(())
                >
                    {move || if vm.loading.get() {
                        view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                    } else {
                        icon("send")
                    }}
                    {move || if vm.loading.get() { " Running…" } else { " Run" }}
                </Button>
            </Flex>
        </div>
    }
}
