//! Page modules for hash-routed views.
//!
//! ARCHITECTURE
//! ============
//! Each page is the content collaborator for one `Content` variant. Pages
//! stay thin: catalog, cart and admin data live with their own providers.

pub mod admin;
pub mod cart;
pub mod category;
pub mod home;
pub mod product;
