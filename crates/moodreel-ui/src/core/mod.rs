//! Core, DOM-free primitives and helpers for the Web UI.
pub mod logic;
pub mod session;
pub mod store;
