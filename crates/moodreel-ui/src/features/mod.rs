//! Feature slices, one per page. State and planning logic compile natively;
//! the `view` modules are wasm-only.

pub mod ai_search;
pub mod auth;
pub mod browse;
pub mod favorites;
pub mod home;
pub mod movie;
pub mod profile;
pub mod search;
