//! Routing definitions for the Moodreel UI.
use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/browse")]
    Browse,
    #[at("/search")]
    Search,
    #[at("/ai-search")]
    AiSearch,
    #[at("/movie/:id")]
    Movie { id: String },
    #[at("/favorites")]
    Favorites,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string carried by the search page URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SearchParams {
    /// Submitted search text.
    #[serde(default)]
    pub q: String,
}

/// Query string carried by the browse page URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BrowseParams {
    /// Genre chip to preselect.
    pub genre: Option<String>,
}
