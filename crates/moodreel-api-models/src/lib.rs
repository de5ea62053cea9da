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
//! Shared HTTP DTOs for the Moodreel catalog API.
//!
//! Every endpoint wraps its payload in [`ApiEnvelope`]; the UI decodes the
//! envelope and never touches raw response bodies. Wire names follow the
//! backend contract (`releaseYear` is camelCase, `poster_path` is not), so
//! field renames live here and nowhere else.
use serde::{Deserialize, Serialize};

/// Uniform `{success, data?, error?}` wrapper returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    /// Whether the call succeeded server-side.
    pub success: bool,
    /// Payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable reason, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A catalog entry as served by the movies endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Backend-issued identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Synopsis shown on detail and hero views.
    pub description: String,
    /// Year of release.
    #[serde(rename = "releaseYear")]
    pub release_year: u32,
    /// Pre-formatted runtime label, e.g. `"2h 16m"`.
    pub duration: String,
    /// Average rating on a 0..=10 scale.
    pub rating: f64,
    /// Genre tags, ordered by relevance.
    pub genres: Vec<String>,
    /// Mood tags, ordered by relevance.
    pub moods: Vec<String>,
    /// Poster image URL when the catalog has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

/// The authenticated account as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Backend-issued identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Favorite movie ids, in insertion order.
    pub favorites: Vec<String>,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Body for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// Display name for the new account.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Body for `POST /auth/users/{id}/favorites`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoritesUpdateRequest {
    /// The full replacement favorites list.
    pub favorites: Vec<String>,
}

/// Body for `POST /movies/ai-search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiSearchRequest {
    /// Free-text description of what the user wants to watch.
    pub prompt: String,
}

/// Genre vocabulary surfaced by the browse filters.
pub const GENRES: [&str; 13] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Fantasy",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Family",
    "Thriller",
];

/// Mood vocabulary surfaced by the mood selector and browse filters.
pub const MOODS: [&str; 7] = [
    "Excited",
    "Happy",
    "Thoughtful",
    "Melancholic",
    "Tense",
    "Inspired",
    "Nostalgic",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_decodes_backend_wire_names() {
        let json = r#"{
            "id": "603",
            "title": "The Matrix",
            "description": "A hacker learns the truth.",
            "releaseYear": 1999,
            "duration": "2h 16m",
            "rating": 8.7,
            "genres": ["Action", "Sci-Fi"],
            "moods": ["Excited", "Thoughtful"],
            "poster_path": "https://image.example/matrix.jpg"
        }"#;
        let movie: Movie = serde_json::from_str(json).expect("movie decodes");
        assert_eq!(movie.release_year, 1999);
        assert_eq!(movie.poster_path.as_deref(), Some("https://image.example/matrix.jpg"));
        assert_eq!(movie.genres, vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn movie_poster_is_optional() {
        let json = r#"{
            "id": "1",
            "title": "Untitled",
            "description": "",
            "releaseYear": 2020,
            "duration": "1h 30m",
            "rating": 6.1,
            "genres": [],
            "moods": []
        }"#;
        let movie: Movie = serde_json::from_str(json).expect("movie decodes");
        assert!(movie.poster_path.is_none());
    }

    #[test]
    fn user_round_trips_with_favorite_order() {
        let user = User {
            id: "u-1".to_string(),
            email: "user@example.com".to_string(),
            name: "Demo User".to_string(),
            favorites: vec!["3".to_string(), "1".to_string(), "2".to_string()],
        };
        let encoded = serde_json::to_string(&user).expect("user encodes");
        let decoded: User = serde_json::from_str(&encoded).expect("user decodes");
        assert_eq!(decoded, user);
    }

    #[test]
    fn envelope_failure_carries_reason() {
        let json = r#"{"success": false, "error": "Incorrect email or password"}"#;
        let envelope: ApiEnvelope<User> = serde_json::from_str(json).expect("envelope decodes");
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Incorrect email or password"));
    }

    #[test]
    fn envelope_success_carries_payload() {
        let json = r#"{"success": true, "data": {"id": "u-1", "email": "a@b.c", "name": "A", "favorites": []}}"#;
        let envelope: ApiEnvelope<User> = serde_json::from_str(json).expect("envelope decodes");
        assert!(envelope.success);
        assert_eq!(envelope.data.map(|user| user.id).as_deref(), Some("u-1"));
    }

    #[test]
    fn vocabularies_are_distinct() {
        let mut genres = GENRES.to_vec();
        genres.sort_unstable();
        genres.dedup();
        assert_eq!(genres.len(), GENRES.len());

        let mut moods = MOODS.to_vec();
        moods.sort_unstable();
        moods.dedup();
        assert_eq!(moods.len(), MOODS.len());
    }
}
