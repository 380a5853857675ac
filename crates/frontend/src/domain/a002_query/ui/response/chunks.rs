use super::view_model::ChunkRow;
use leptos::prelude::*;

/// Список найденных чанков: score, источник, текст
#[component]
#[allow(non_snake_case)]
pub fn ChunksList(chunks: Vec<ChunkRow>) -> impl IntoView {
    if chunks.is_empty() {
        return view! {
            <div class="chunks-empty">
                <p class="response__rejected_message">"No chunks yet"</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="chunks-container">
            <h4>{format!("Chunks ({})", chunks.len())}</h4>
            <ol class="chunks-list">
                {chunks
                    .into_iter()
                    .map(|c| {
                        view! {
                            <li class="chunks-list__item" data-chunk-id=c.id>
                                <div class="chunks-list__meta">
                                    <span class="chunks-list__score">{c.score}</span>
                                    {(!c.source.is_empty())
                                        .then(|| view! { <span class="chunks-list__source">{c.source}</span> })}
                                </div>
                                <div class="chunks-list__content">{c.content}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
    .into_any()
}
