//! Shopping cart view.

use leptos::prelude::*;

use crate::state::page::Page;
use crate::util::hash::hash_for;

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <section class="cart-page">
            <h1>"Your Cart"</h1>
            <div class="cart-page__items"></div>
            <a class="cart-page__continue" href=hash_for(Page::Home)>
                "Continue shopping"
            </a>
        </section>
    }
}
