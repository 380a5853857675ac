use crate::shared::api_utils::api_url;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Backend: Online",
            ServerStatus::Offline => "Backend: Offline",
            ServerStatus::Checking => "Backend: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Одна проверка, без опроса: при монтировании и по клику
    let check_server = move || {
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let online = check_health().await;
            if !online {
                log::warn!("backend health check failed");
            }
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    };

    Effect::new(move |_| {
        check_server();
    });

    view! {
        <footer data-zone="footer" class="layout__footer">
            <span>"© 2025 RAG System"</span>
            <span
                class=move || status.get().css_class()
                title="Click to re-check"
                on:click=move |_| check_server()
            >
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

/// `GET /health` ответил 2xx
pub async fn check_health() -> bool {
    match gloo_net::http::Request::get(&api_url("/health"))
        .header("Accept", "application/json")
        .send()
        .await
    {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
