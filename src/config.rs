//! Runtime configuration for the storefront client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page may embed a JSON document in
//! `<script id="storefront-config" type="application/json">`. Every field is
//! optional; anything missing keeps its default. Build-time Leptos settings
//! live in `[package.metadata.leptos]` instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Element id of the embedded configuration document.
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub transition: TransitionConfig,
    pub log_level: LogLevel,
}

/// Page transition timings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Fade-out length before the page content swaps.
    pub fade_out_ms: u64,
    /// Fade-in length after the swap, until the transition flag clears.
    pub fade_in_ms: u64,
    /// Reset the window scroll offset to the top at the swap.
    pub scroll_to_top: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { fade_out_ms: 150, fade_in_ms: 50, scroll_to_top: true }
    }
}

impl TransitionConfig {
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }
}

/// Console log verbosity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

impl StorefrontConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] if `raw` is not valid JSON for
    /// this shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the embedded configuration, falling back to defaults when the
    /// element is absent or malformed.
    pub fn load() -> Self {
        let Some(raw) = read_embedded() else {
            return Self::default();
        };
        Self::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            Self::default()
        })
    }
}

fn read_embedded() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window().and_then(|w| w.document())?;
        let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
        el.text_content().filter(|text| !text.trim().is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
