//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (location hash, scrolling,
//! timers) from page and component logic. Browser calls compile to no-ops
//! without the `hydrate` feature so the logic stays testable natively.

pub mod driver;
pub mod hash;
pub mod scroll;
