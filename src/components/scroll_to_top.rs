//! Floating back-to-top button shown once the page is scrolled down.

use leptos::prelude::*;

use crate::util::scroll;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener_untyped("scroll", move |_| {
            visible.set(scroll::shows_back_to_top(scroll::scroll_y()));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || visible.get()>
            <button
                class="scroll-to-top"
                aria-label="Back to top"
                on:click=move |_| scroll::scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
