//! Selection state for the browse page.

/// Active filter tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrowseTab {
    /// Chips drawn from the genre vocabulary.
    #[default]
    Genres,
    /// Chips drawn from the mood vocabulary.
    Moods,
}

impl BrowseTab {
    /// Tab strip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Genres => "By Genre",
            Self::Moods => "By Mood",
        }
    }
}

/// What the page fetches for the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogQuery {
    /// The unfiltered catalog.
    All,
    /// Movies carrying the genre.
    Genre(String),
    /// Movies carrying the mood.
    Mood(String),
}

/// Tab plus one remembered pick per vocabulary. Switching tabs keeps the
/// inactive pick, so flipping back restores it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseSelection {
    /// Which vocabulary the chip strip shows.
    pub tab: BrowseTab,
    /// Remembered genre pick.
    pub genre: Option<String>,
    /// Remembered mood pick.
    pub mood: Option<String>,
}

impl BrowseSelection {
    /// Selection seeded from the route's `genre` parameter.
    #[must_use]
    pub fn seeded(genre: Option<String>) -> Self {
        Self {
            genre,
            ..Self::default()
        }
    }

    /// Click a genre chip: the active pick clears, any other replaces.
    pub fn toggle_genre(&mut self, genre: &str) {
        self.genre = if self.genre.as_deref() == Some(genre) {
            None
        } else {
            Some(genre.to_string())
        };
    }

    /// Click a mood chip: the active pick clears, any other replaces.
    pub fn toggle_mood(&mut self, mood: &str) {
        self.mood = if self.mood.as_deref() == Some(mood) {
            None
        } else {
            Some(mood.to_string())
        };
    }

    /// The fetch this selection calls for. Only the active tab's pick
    /// drives the query.
    #[must_use]
    pub fn query(&self) -> CatalogQuery {
        match self.tab {
            BrowseTab::Genres => self
                .genre
                .clone()
                .map_or(CatalogQuery::All, CatalogQuery::Genre),
            BrowseTab::Moods => self
                .mood
                .clone()
                .map_or(CatalogQuery::All, CatalogQuery::Mood),
        }
    }

    /// Results heading for the current query.
    #[must_use]
    pub fn heading(&self) -> String {
        match self.query() {
            CatalogQuery::All => "All Movies".to_string(),
            CatalogQuery::Genre(name) | CatalogQuery::Mood(name) => format!("{name} Movies"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_queries_the_full_catalog() {
        let selection = BrowseSelection::default();
        assert_eq!(selection.tab, BrowseTab::Genres);
        assert_eq!(selection.query(), CatalogQuery::All);
        assert_eq!(selection.heading(), "All Movies");
    }

    #[test]
    fn genre_pick_toggles_and_replaces() {
        let mut selection = BrowseSelection::default();
        selection.toggle_genre("Action");
        assert_eq!(selection.query(), CatalogQuery::Genre("Action".into()));
        assert_eq!(selection.heading(), "Action Movies");

        selection.toggle_genre("Drama");
        assert_eq!(selection.query(), CatalogQuery::Genre("Drama".into()));

        selection.toggle_genre("Drama");
        assert_eq!(selection.query(), CatalogQuery::All);
    }

    #[test]
    fn inactive_tab_pick_survives_but_stops_driving_the_query() {
        let mut selection = BrowseSelection::default();
        selection.toggle_genre("Horror");
        selection.tab = BrowseTab::Moods;
        assert_eq!(selection.query(), CatalogQuery::All);

        selection.toggle_mood("Happy");
        assert_eq!(selection.query(), CatalogQuery::Mood("Happy".into()));
        assert_eq!(selection.heading(), "Happy Movies");

        selection.tab = BrowseTab::Genres;
        assert_eq!(selection.query(), CatalogQuery::Genre("Horror".into()));
        assert_eq!(selection.genre.as_deref(), Some("Horror"));
        assert_eq!(selection.mood.as_deref(), Some("Happy"));
    }

    #[test]
    fn seeded_selection_starts_on_the_genre_tab_with_the_pick_applied() {
        let selection = BrowseSelection::seeded(Some("Sci-Fi".to_string()));
        assert_eq!(selection.tab, BrowseTab::Genres);
        assert_eq!(selection.query(), CatalogQuery::Genre("Sci-Fi".into()));

        let blank = BrowseSelection::seeded(None);
        assert_eq!(blank.query(), CatalogQuery::All);
    }

    #[test]
    fn tab_labels_match_the_strip() {
        assert_eq!(BrowseTab::Genres.label(), "By Genre");
        assert_eq!(BrowseTab::Moods.label(), "By Mood");
    }
}
