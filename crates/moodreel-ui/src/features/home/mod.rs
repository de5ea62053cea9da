//! Landing page: hero pick, mood selector, and catalog rows.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
