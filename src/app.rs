//! Root application component: page routing and faded transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the transition driver for its whole lifetime. It adopts the URL
//! hash once mounted, is fed by `hashchange` and `navigate` window events, and
//! is torn down with the component so no timer outlives it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{footer::Footer, header::Header, scroll_to_top::ScrollToTop};
use crate::config::StorefrontConfig;
use crate::pages::{
    admin::AdminPage, cart::CartPage, category::CategoryPage, home::HomePage, product::ProductPage,
};
use crate::state::page::{Content, Page};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Render the content collaborator for `page`.
pub fn render_page(page: Page) -> AnyView {
    match page.content() {
        Content::HomeComposite => view! { <HomePage/> }.into_any(),
        Content::Category(category) => view! { <CategoryPage category=category/> }.into_any(),
        Content::Cart => view! { <CartPage/> }.into_any(),
        Content::Product => view! { <ProductPage/> }.into_any(),
        Content::Admin => view! { <AdminPage/> }.into_any(),
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StorefrontConfig::load();
    let (page, fading) = routing(&config);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <div class="storefront">
            <Show when=move || page.get().shows_chrome()>
                <Header current=page/>
            </Show>
            <main class="storefront__main">
                <div class="page" class:is-fading=move || fading.get()>
                    {move || render_page(page.get())}
                </div>
            </main>
            <Show when=move || page.get().shows_chrome()>
                <Footer/>
            </Show>
            <ScrollToTop/>
        </div>
    }
}

/// Wire the transition driver to browser events and expose the rendered
/// page and the fade flag.
#[cfg(feature = "hydrate")]
fn routing(config: &StorefrontConfig) -> (Memo<Page>, Memo<bool>) {
    use crate::state::transition::Timer;
    use crate::util::driver::{BrowserScheduler, BrowserViewport, TransitionDriver};
    use crate::util::hash;
    use wasm_bindgen::JsCast;

    // The server cannot see the hash, so render home first and adopt the hash
    // after hydration.
    let driver = RwSignal::new(TransitionDriver::new(
        Page::Home,
        &config.transition,
        BrowserScheduler::default(),
        BrowserViewport,
    ));
    let on_fire = Callback::new(move |timer: Timer| {
        driver.update(|d| {
            d.fire(timer);
        });
    });
    driver.update_untracked(|d| d.scheduler_mut().bind(on_fire));

    Effect::new(move |_| {
        let initial = hash::current_page();
        driver.update(|d| d.jump(initial));
    });

    let on_hash_change = window_event_listener_untyped("hashchange", move |_| {
        let target = hash::current_page();
        driver.update(|d| {
            d.navigate(target);
        });
    });
    let on_navigate = window_event_listener_untyped(hash::NAVIGATE_EVENT, move |ev| {
        let detail = ev
            .dyn_ref::<web_sys::CustomEvent>()
            .and_then(|custom| custom.detail().as_string());
        let target = hash::page_from_event_detail(detail.as_deref());
        driver.update(|d| {
            d.navigate(target);
        });
        hash::navigate_to_page(target);
    });

    on_cleanup(move || {
        on_hash_change.remove();
        on_navigate.remove();
        driver.try_update_untracked(|d| d.teardown());
    });

    let page = Memo::new(move |_| driver.with(|d| d.current()));
    let fading = Memo::new(move |_| driver.with(|d| d.is_transitioning()));
    (page, fading)
}

/// Without a browser there are no navigation signals; render the home view.
#[cfg(not(feature = "hydrate"))]
fn routing(config: &StorefrontConfig) -> (Memo<Page>, Memo<bool>) {
    let _ = config;
    (Memo::new(|_| Page::Home), Memo::new(|_| false))
}
