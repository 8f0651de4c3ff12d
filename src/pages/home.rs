//! Landing view: marketing sections stacked in a fixed order.

use leptos::prelude::*;

use crate::components::sections::{
    AppPromotion, CategoryCollections, HappyCustomers, HeroCarousel, NewArrivalsSection, NewDealsSection,
    StoreLocationSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <HeroCarousel/>
            <CategoryCollections/>
            <AppPromotion/>
            <NewDealsSection/>
            <NewArrivalsSection/>
            <HappyCustomers/>
            <StoreLocationSection/>
        </div>
    }
}
