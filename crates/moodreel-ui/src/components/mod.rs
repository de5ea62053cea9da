pub(crate) mod footer;
pub(crate) mod mood_selector;
pub(crate) mod movie_card;
pub(crate) mod movie_list;
pub(crate) mod navbar;
pub(crate) mod toast;
pub(crate) mod video_player;
