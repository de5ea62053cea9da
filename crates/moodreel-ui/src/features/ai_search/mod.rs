//! Free-text AI search.

#[cfg(target_arch = "wasm32")]
pub mod view;
