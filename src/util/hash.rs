//! URL hash navigation and the `navigate` custom event.
//!
//! The hash carries the page token (`#cart`, `#/cart`, `#product/42`). Only
//! the first path segment matters; query strings and trailing segments are
//! left for the page itself.

#[cfg(test)]
#[path = "hash_test.rs"]
mod hash_test;

use crate::state::page::Page;

/// Name of the custom window event used by in-app navigation.
pub const NAVIGATE_EVENT: &str = "navigate";

/// Extract the page token from a `location.hash` value.
pub fn token_from_hash(hash: &str) -> &str {
    let trimmed = hash.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let body = body.trim_start_matches('/');
    let end = body.find(['/', '?', '&']).unwrap_or(body.len());
    body[..end].trim()
}

/// Resolve a `location.hash` value to a page; anything unrecognized is home.
pub fn page_from_hash(hash: &str) -> Page {
    Page::from_token(token_from_hash(hash))
}

/// The hash that requests `page`.
pub fn hash_for(page: Page) -> String {
    format!("#{}", page.token())
}

/// Resolve the `detail` of a `navigate` event.
pub fn page_from_event_detail(detail: Option<&str>) -> Page {
    detail.map_or(Page::Home, Page::from_token)
}

/// Read the page named by the current URL hash.
pub fn current_page() -> Page {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        page_from_hash(&hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Page::Home
    }
}

/// Request `page` by rewriting the URL hash, which fires `hashchange`.
pub fn navigate_to_page(page: Page) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.hash().ok().is_some_and(|hash| page_from_hash(&hash) == page) {
            return;
        }
        if let Err(err) = location.set_hash(&hash_for(page)) {
            log::warn!("failed to set location hash for {page}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
    }
}

/// Request `page` through a `navigate` event on `window`, without touching
/// the hash directly.
pub fn dispatch_navigate(page: Page) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = try_dispatch_navigate(page) {
            log::warn!("{err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
    }
}

#[cfg(feature = "hydrate")]
fn try_dispatch_navigate(page: Page) -> crate::error::Result<()> {
    use crate::error::Error;

    let window = web_sys::window().ok_or_else(|| Error::Browser("no window".to_owned()))?;
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&wasm_bindgen::JsValue::from_str(page.token()));
    let event = web_sys::CustomEvent::new_with_event_init_dict(NAVIGATE_EVENT, &init)
        .map_err(|err| Error::Browser(format!("create {NAVIGATE_EVENT} event: {err:?}")))?;
    window
        .dispatch_event(&event)
        .map_err(|err| Error::Browser(format!("dispatch {NAVIGATE_EVENT} event: {err:?}")))?;
    Ok(())
}
