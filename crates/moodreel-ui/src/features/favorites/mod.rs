//! Favorites list page.
//!
//! # Design
//! - The page re-fetches whenever the signed-in user's favorites change, so
//!   a toggle elsewhere in the app is reflected on return.
//! - Ids are fetched in parallel and failures dropped from the grid.

#[cfg(target_arch = "wasm32")]
pub mod view;
