//! Movie detail page.
//!
//! # Design
//! - A card click hands the movie through history state, so the page only
//!   fetches on a direct visit or refresh.

#[cfg(target_arch = "wasm32")]
pub mod view;
