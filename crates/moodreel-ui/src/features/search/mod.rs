//! Debounced catalog search.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
