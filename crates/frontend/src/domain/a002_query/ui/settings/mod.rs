//! Настройки запроса: top_k и min_similarity

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a002_query::SettingsPatch;
use leptos::prelude::*;

/// Целое >= 1, иначе `None`
pub fn parse_top_k(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

/// Число в [0, 1], иначе `None`
pub fn parse_min_similarity(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| (0.0..=1.0).contains(v))
}

#[component]
#[allow(non_snake_case)]
pub fn QuerySettingsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let invalid = RwSignal::new(false);

    let top_k = move || ctx.queries.with(|q| q.settings.top_k.to_string());
    let min_similarity = move || ctx.queries.with(|q| format!("{:.2}", q.settings.min_similarity));

    view! {
        <div class="settings">
            <h4>{icon("settings")}" Settings"</h4>
            <label class="settings__field">
                <span>"Top K"</span>
                <input
                    type="number"
                    min="1"
                    step="1"
                    prop:value=top_k
                    on:change=move |ev| match parse_top_k(&event_target_value(&ev)) {
                        Some(v) => {
                            invalid.set(false);
                            ctx.update_settings(SettingsPatch::top_k(v));
                        }
                        None => invalid.set(true),
                    }
                />
            </label>
            <label class="settings__field">
                <span>"Min similarity"</span>
                <input
                    type="number"
                    min="0"
                    max="1"
                    step="0.05"
                    prop:value=min_similarity
                    on:change=move |ev| match parse_min_similarity(&event_target_value(&ev)) {
                        Some(v) => {
                            invalid.set(false);
                            ctx.update_settings(SettingsPatch::min_similarity(v));
                        }
                        None => invalid.set(true),
                    }
                />
            </label>
            <Show when=move || invalid.get()>
                <p class="settings__error">"Top K must be ≥ 1, min similarity in 0…1"</p>
            </Show>
        </div>
    }
}
