pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Каркас страницы.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |   Query    |   Documents   |  Settings   |
/// |  (Left)    |   (Center)    |  (Right)    |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="layout">
            <header::Header />
            <main class="layout__main block__input">
                <section data-zone="left" class="input__query">
                    {left()}
                </section>
                <section data-zone="center" class="input__query">
                    {center()}
                </section>
                <aside data-zone="right" class="layout__aside">
                    {right()}
                </aside>
            </main>
            <footer::Footer />
        </div>
    }
}
