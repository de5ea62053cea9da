//! Catalog browsing with genre and mood filter tabs.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
