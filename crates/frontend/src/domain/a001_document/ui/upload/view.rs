//! Document Upload - View Component

use super::view_model::{can_clear, can_upload, DocumentUploadVm};
use crate::domain::a001_document::api::upload_document;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn DocumentUpload() -> impl IntoView {
    let ctx = use_app_context();
    let vm = DocumentUploadVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let has_file = move || vm.selected.with(|f| f.is_some());

    let reset_input = move || {
        if let Some(input) = file_input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        vm.selected.set(file);
    };

    let handle_upload = move |_: leptos::ev::MouseEvent| {
        if !can_upload(has_file(), vm.uploading.get_untracked()) {
            return;
        }
        let Some(file) = vm.selected.get_untracked() else {
            return;
        };
        let title = Some(vm.title.get_untracked()).filter(|t| !t.trim().is_empty());

        vm.uploading.set(true);
        log::info!("upload started: {}", file.name());
        wasm_bindgen_futures::spawn_local(async move {
            match upload_document(file, title).await {
                Ok(doc) => {
                    log::info!("upload finished: id={} filename={}", doc.id, doc.filename);
                    ctx.add_document(doc);
                    vm.clear_selection();
                    reset_input();
                }
                Err(e) => {
                    // Выбор файла сохраняется, пользователь может повторить
                    log::error!("Upload error: {} ({:?})", e, e);
                }
            }
            vm.uploading.set(false);
        });
    };

    let handle_clear = move |_: leptos::ev::MouseEvent| {
        if !can_clear(has_file(), vm.uploading.get_untracked()) {
            return;
        }
        vm.clear_selection();
        reset_input();
    };

    view! {
        <div class="upload">
            <label class="upload__input-label">
                <span class="upload__btn">{icon("file")}" Choose File"</span>
                <input
                    type="file"
                    class="upload__input"
                    accept=".pdf,.txt,.md,.docx"
                    node_ref=file_input_ref
                    on:change=on_file_change
                    disabled=move || vm.uploading.get()
                />
            </label>

            <span class="upload__filename">
                {move || vm.selected_name().unwrap_or_else(|| "No file selected".to_string())}
            </span>

            <Show when=has_file>
                <Input
                    value=vm.title
                    placeholder="Title (optional)"
                    disabled=vm.uploading
                />
            </Show>

            <Flex style="gap: 8px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_upload(has_file(), vm.uploading.get()))
                    on_click=handle_upload
                >
                    {icon("upload")}
                    {move || if vm.uploading.get() { " Uploading…" } else { " Upload" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || !can_clear(has_file(), vm.uploading.get()))
                    on_click=handle_clear
                >
                    {icon("x")}
                    " Clear"
                </Button>
            </Flex>
        </div>
    }
}
