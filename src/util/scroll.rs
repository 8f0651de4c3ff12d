//! Window scroll helpers. No-ops outside the browser.

/// Offset past which the floating back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Jump to the top-left corner of the document.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Whether the back-to-top button should show at vertical offset `y`.
pub fn shows_back_to_top(y: f64) -> bool {
    y > BACK_TO_TOP_THRESHOLD
}
