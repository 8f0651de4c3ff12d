//! Single product detail view.

use leptos::prelude::*;

use crate::state::page::Page;
use crate::util::hash::hash_for;

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <section class="product-page">
            <div class="product-page__gallery"></div>
            <div class="product-page__details"></div>
            <a class="product-page__cart" href=hash_for(Page::Cart)>
                "View cart"
            </a>
        </section>
    }
}
