//! Список документов текущей сессии.
//!
//! Показывает срез `documents`. Refresh подтягивает список с backend,
//! удаление идёт через backend и только потом убирает строку из среза.

use crate::domain::a001_document::api::{delete_document, list_documents};
use crate::layout::global_context::use_app_context;
use crate::shared::format::{format_file_size, format_uploaded_at};
use crate::shared::icons::icon;
use contracts::domain::a001_document::Document;
use leptos::prelude::*;
use thaw::*;

/// Вторая строка карточки: размер, тип, время загрузки
pub fn document_caption(doc: &Document) -> String {
    let mut parts = vec![format_file_size(doc.file_size)];
    if !doc.content_type.is_empty() {
        parts.push(doc.content_type.clone());
    }
    if !doc.uploaded_at.is_empty() {
        parts.push(format_uploaded_at(&doc.uploaded_at));
    }
    parts.join(" • ")
}

/// Строки списка с ключом `(позиция, id)`: id в срезе могут повторяться
pub fn keyed_rows(items: &[Document]) -> Vec<((usize, String), Document)> {
    items
        .iter()
        .enumerate()
        .map(|(index, doc)| ((index, doc.id.clone()), doc.clone()))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentsList() -> impl IntoView {
    let ctx = use_app_context();
    let loading = RwSignal::new(false);
    let deleting = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let handle_refresh = move |_: leptos::ev::MouseEvent| {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match list_documents().await {
                Ok(items) => {
                    log::info!("documents loaded: {}", items.len());
                    ctx.set_documents(items);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("list documents failed: {:?}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    let handle_delete = move |id: String| {
        if deleting.get_untracked().is_some() {
            return;
        }
        deleting.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match delete_document(&id).await {
                Ok(_) => {
                    ctx.remove_document(&id);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("delete document {} failed: {:?}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            deleting.set(None);
        });
    };

    view! {
        <div class="documents">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h4>{move || format!("Uploaded ({})", ctx.documents.with(|d| d.items.len()))}</h4>
                <Flex style="gap: 4px;">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=loading
                        on_click=handle_refresh
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    // Только локальный список, backend не трогаем
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || ctx.documents.with(|d| d.items.is_empty()))
                        on_click=move |_| ctx.clear_documents()
                    >
                        "Clear list"
                    </Button>
                </Flex>
            </Flex>

            {move || error.get().map(|e| view! { <p class="documents__error">{e}</p> })}

            <Show
                when=move || ctx.documents.with(|d| !d.items.is_empty())
                fallback=|| view! { <p class="documents__empty">"No documents yet"</p> }
            >
                <ul class="documents__list">
                    <For
                        each=move || ctx.documents.with(|d| keyed_rows(&d.items))
                        key=|(key, _)| key.clone()
                        let:row
                    >
                        {
                            let (_, doc) = row;
                            let id = doc.id.clone();
                            let id_for_state = doc.id.clone();
                            let caption = document_caption(&doc);
                            view! {
                                <li class="documents__item">
                                    <div class="documents__meta">
                                        <span class="documents__name">{doc.display_name().to_string()}</span>
                                        <span class="documents__caption">{caption}</span>
                                    </div>
                                    <button
                                        class="button button--icon"
                                        title="Delete"
                                        disabled=move || deleting.get().as_deref() == Some(id_for_state.as_str())
                                        on:click=move |_| handle_delete(id.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_caption() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "filename": "geo.pdf",
            "content_type": "application/pdf",
            "file_size": 2048,
            "uploaded_at": "2025-03-01T10:15:00.5"
        }))
        .unwrap();
        assert_eq!(
            document_caption(&doc),
            "2.0 KB • application/pdf • 01.03.2025 10:15"
        );
    }

    #[test]
    fn test_keyed_rows_unique_for_duplicate_ids() {
        let a: Document = serde_json::from_value(serde_json::json!({"id": "a"})).unwrap();
        let b: Document = serde_json::from_value(serde_json::json!({"id": "b"})).unwrap();
        let rows = keyed_rows(&[a.clone(), b, a]);

        let keys: Vec<_> = rows.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![(0, "a".to_string()), (1, "b".to_string()), (2, "a".to_string())]
        );
        assert_eq!(rows[2].1.id, "a");
    }

    #[test]
    fn test_document_caption_minimal() {
        let doc: Document = serde_json::from_value(serde_json::json!({"id": "d1"})).unwrap();
        assert_eq!(document_caption(&doc), "0 B");
    }
}
