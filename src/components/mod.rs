//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome (header, footer, back-to-top) and the
//! marketing sections composed by the home page.

pub mod footer;
pub mod header;
pub mod scroll_to_top;
pub mod sections;
