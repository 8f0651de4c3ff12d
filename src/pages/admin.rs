//! Full-screen admin panel. Renders without the shared header and footer.

use leptos::prelude::*;

use crate::state::page::Page;
use crate::util::hash::navigate_to_page;

#[component]
pub fn AdminPage() -> impl IntoView {
    let on_close = move |_| navigate_to_page(Page::Home);

    view! {
        <div class="admin-panel">
            <header class="admin-panel__bar">
                <h1>"Store Admin"</h1>
                <button class="admin-panel__close" on:click=on_close>
                    "Close"
                </button>
            </header>
            <div class="admin-panel__body"></div>
        </div>
    }
}
