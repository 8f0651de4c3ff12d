//! Site footer.

use leptos::prelude::*;

use crate::state::page::Page;
use crate::util::hash::hash_for;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                <a href=hash_for(Page::NewArrivals)>"New Arrivals"</a>
                <a href=hash_for(Page::Summer2025)>"Summer 2025"</a>
                <a href=hash_for(Page::Admin)>"Admin"</a>
            </nav>
            <p class="site-footer__legal">"All rights reserved."</p>
        </footer>
    }
}
