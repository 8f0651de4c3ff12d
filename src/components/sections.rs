//! Marketing sections composed by the home page.

use leptos::prelude::*;

use crate::state::page::{Category, Page};
use crate::util::hash::hash_for;

#[component]
pub fn HeroCarousel() -> impl IntoView {
    view! {
        <section class="hero-carousel">
            <h1>"Summer 2025 Collection"</h1>
            <a class="hero-carousel__cta" href=hash_for(Page::Summer2025)>
                "Shop now"
            </a>
        </section>
    }
}

#[component]
pub fn CategoryCollections() -> impl IntoView {
    let collections = [Category::TShirts, Category::Shirts, Category::Bottoms, Category::Jackets, Category::Accessories];

    view! {
        <section class="category-collections">
            {collections
                .into_iter()
                .map(|category| {
                    view! {
                        <a class="category-collections__tile" href=hash_for(category.page())>
                            {category.title()}
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn AppPromotion() -> impl IntoView {
    view! {
        <section class="app-promotion">
            <h2>"Get the app"</h2>
        </section>
    }
}

#[component]
pub fn NewDealsSection() -> impl IntoView {
    view! {
        <section class="new-deals">
            <h2>"New Deals"</h2>
        </section>
    }
}

#[component]
pub fn NewArrivalsSection() -> impl IntoView {
    view! {
        <section class="new-arrivals">
            <h2>"New Arrivals"</h2>
            <a href=hash_for(Page::NewArrivals)>"See all"</a>
        </section>
    }
}

#[component]
pub fn HappyCustomers() -> impl IntoView {
    view! {
        <section class="happy-customers">
            <h2>"Happy Customers"</h2>
        </section>
    }
}

#[component]
pub fn StoreLocationSection() -> impl IntoView {
    view! {
        <section class="store-location">
            <h2>"Visit Our Store"</h2>
        </section>
    }
}
