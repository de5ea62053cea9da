//! Environment helpers for the app shell.

use crate::core::logic::compose_api_base;
use gloo::utils::window;
use web_sys::Url;

/// API base derived from the window location; see [`compose_api_base`] for
/// the port mapping.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        return compose_api_base(&url.protocol(), &url.hostname(), &url.port());
    }

    "http://127.0.0.1:5000/api".to_string()
}
