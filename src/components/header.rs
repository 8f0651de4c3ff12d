//! Site header with category navigation and the cart link.

use leptos::prelude::*;

use crate::state::page::{Category, Page};
use crate::util::hash::hash_for;

const NAV_CATEGORIES: [Category; 7] = [
    Category::NewArrivals,
    Category::TShirts,
    Category::Shirts,
    Category::Bottoms,
    Category::Jackets,
    Category::Accessories,
    Category::Summer2025,
];

#[component]
pub fn Header(#[prop(into)] current: Signal<Page>) -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href=hash_for(Page::Home)>
                "Storefront"
            </a>
            <nav class="site-header__nav">
                {NAV_CATEGORIES
                    .into_iter()
                    .map(|category| {
                        let page = category.page();
                        view! {
                            <a
                                class="site-header__link"
                                class:is-active=move || current.get() == page
                                href=hash_for(page)
                            >
                                {category.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <a class="site-header__cart" href=hash_for(Page::Cart)>
                "Cart"
            </a>
        </header>
    }
}
