//! Login and signup flows.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
