#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Moodreel web UI.
//!
//! A Yew front-end for the Moodreel movie catalog: browsing, mood and genre
//! filters, search, AI search, and a favorites list tied to the signed-in
//! account. Pure state and planning logic lives in [`core`] and in the
//! per-feature `state`/`logic` modules so it compiles and tests natively;
//! everything that touches the DOM or the network is wasm-only.

pub mod core;
pub mod features;
pub mod models;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::logic::{QueryValue, request_url};
    use crate::models::mood_emoji;

    #[test]
    fn request_url_spans_base_and_query() {
        let url = request_url(
            "http://127.0.0.1:5000/api",
            "/movies",
            &[("genres", QueryValue::list(["Sci-Fi", "Drama"]))],
        );
        assert_eq!(
            url,
            "http://127.0.0.1:5000/api/movies?genres[]=Sci-Fi&genres[]=Drama"
        );
    }

    #[test]
    fn mood_emoji_covers_selector_vocabulary() {
        for mood in moodreel_api_models::MOODS {
            assert_ne!(mood_emoji(mood), "🎬", "missing emoji for {mood}");
        }
    }
}
