//! Error types for the storefront client.
//!
//! Nothing here is surfaced to shoppers. Unknown pages fall back to the home
//! view, and browser failures are logged and swallowed by their callers.

use thiserror::Error;

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Strict page parse of a token that names no page.
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// Malformed configuration JSON.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser API call failed (timer, event dispatch, location write).
    #[error("browser error: {0}")]
    Browser(String),
}
