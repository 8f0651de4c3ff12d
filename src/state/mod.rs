//! Client-side navigation state.
//!
//! DESIGN
//! ======
//! `page` names what can be shown, `transition` sequences how the shown page
//! changes. Both are plain data so they can be driven without a browser.

pub mod page;
pub mod transition;
