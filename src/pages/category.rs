//! Catalog listing for a single category.

use leptos::prelude::*;

use crate::state::page::Category;

#[component]
pub fn CategoryPage(category: Category) -> impl IntoView {
    view! {
        <section class="category-page" data-category=category.page().token()>
            <h1 class="category-page__title">{category.title()}</h1>
            <div class="category-page__grid"></div>
        </section>
    }
}
