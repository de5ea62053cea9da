//! HTTP client for the Moodreel REST API.
//!
//! # Design
//! - One method per remote call; each maps every failure class into an
//!   [`ApiError`] carrying that call's message.
//! - Responses arrive wrapped in [`ApiEnvelope`]; `success: false` or a
//!   missing payload is a rejection even on HTTP 200.

use crate::core::logic::{
    build_ai_recommendations_path, build_favorites_path, build_genre_path, build_mood_path,
    build_movie_path, build_recommended_path, build_search_path, request_url,
};
use gloo::console;
use gloo_net::http::{Request, Response};
use moodreel_api_models::{
    AiSearchRequest, ApiEnvelope, FavoritesUpdateRequest, LoginRequest, Movie, SignupRequest, User,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure surfaced by [`ApiClient`] calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a decodable response.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status.
    #[error("{message}")]
    Http {
        /// Message to surface to the user.
        message: String,
        /// Status code of the response.
        status: u16,
    },
    /// The server answered 200 but rejected the operation.
    #[error("{0}")]
    Rejected(String),
}

/// Failure classes before the per-call message is applied.
enum CallFailure {
    Transport,
    Http { status: u16, reason: Option<String> },
    Rejected { reason: Option<String> },
}

impl CallFailure {
    fn with_message(self, message: &str) -> ApiError {
        match self {
            Self::Transport => ApiError::Transport(message.to_string()),
            Self::Http { status, .. } => ApiError::Http {
                message: message.to_string(),
                status,
            },
            Self::Rejected { .. } => ApiError::Rejected(message.to_string()),
        }
    }

    fn with_server_reason(self, fallback: &str) -> ApiError {
        match self {
            Self::Transport => ApiError::Transport(fallback.to_string()),
            Self::Http { status, reason } => ApiError::Http {
                message: reason.unwrap_or_else(|| fallback.to_string()),
                status,
            },
            Self::Rejected { reason } => {
                ApiError::Rejected(reason.unwrap_or_else(|| fallback.to_string()))
            }
        }
    }
}

/// REST client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client over the given base URL, written without a trailing slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_payload<T: DeserializeOwned>(&self, path: &str) -> Result<T, CallFailure> {
        let url = request_url(&self.base_url, path, &[]);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|_| CallFailure::Transport)?;
        Self::unwrap_envelope(response).await
    }

    async fn post_payload<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, CallFailure> {
        let url = request_url(&self.base_url, path, &[]);
        let response = Request::post(&url)
            .json(body)
            .map_err(|_| CallFailure::Transport)?
            .send()
            .await
            .map_err(|_| CallFailure::Transport)?;
        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, CallFailure> {
        if !response.ok() {
            let status = response.status();
            let reason = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.error);
            return Err(CallFailure::Http { status, reason });
        }
        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|_| CallFailure::Transport)?;
        if envelope.success {
            envelope.data.ok_or(CallFailure::Rejected {
                reason: envelope.error,
            })
        } else {
            Err(CallFailure::Rejected {
                reason: envelope.error,
            })
        }
    }

    /// Full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the envelope carries no
    /// movie list, always messaged `Failed to load movies`.
    pub async fn fetch_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.get_payload("/movies")
            .await
            .map_err(|failure| failure.with_message("Failed to load movies"))
    }

    /// One movie by id.
    ///
    /// # Errors
    ///
    /// Returns `Movie not found` when the envelope rejects the id, and
    /// `Failed to load movie` for transport and HTTP faults.
    pub async fn fetch_movie(&self, id: &str) -> Result<Movie, ApiError> {
        self.get_payload(&build_movie_path(id))
            .await
            .map_err(|failure| {
                let message = if matches!(failure, CallFailure::Rejected { .. }) {
                    "Movie not found"
                } else {
                    "Failed to load movie"
                };
                failure.with_message(message)
            })
    }

    /// Title search.
    ///
    /// # Errors
    ///
    /// Returns an error messaged `Search failed` for every failure class.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, ApiError> {
        self.get_payload(&build_search_path(query))
            .await
            .map_err(|failure| failure.with_message("Search failed"))
    }

    /// Movies carrying the given genre.
    ///
    /// # Errors
    ///
    /// Returns an error messaged `Failed to load genre movies` for every
    /// failure class.
    pub async fn movies_by_genre(&self, genre: &str) -> Result<Vec<Movie>, ApiError> {
        self.get_payload(&build_genre_path(genre))
            .await
            .map_err(|failure| failure.with_message("Failed to load genre movies"))
    }

    /// Movies carrying the given mood.
    ///
    /// # Errors
    ///
    /// Returns an error messaged `Failed to load mood movies` for every
    /// failure class.
    pub async fn movies_by_mood(&self, mood: &str) -> Result<Vec<Movie>, ApiError> {
        self.get_payload(&build_mood_path(mood))
            .await
            .map_err(|failure| failure.with_message("Failed to load mood movies"))
    }

    /// Personalized recommendations for a user.
    ///
    /// # Errors
    ///
    /// Returns an error messaged `Failed to load recommendations` for every
    /// failure class.
    pub async fn recommended_movies(&self, user_id: &str) -> Result<Vec<Movie>, ApiError> {
        self.get_payload(&build_recommended_path(user_id))
            .await
            .map_err(|failure| failure.with_message("Failed to load recommendations"))
    }

    /// Movies similar to the named one.
    ///
    /// # Errors
    ///
    /// Returns an error messaged `Failed to load AI recommendations` for
    /// every failure class.
    pub async fn ai_recommendations(&self, movie_name: &str) -> Result<Vec<Movie>, ApiError> {
        self.get_payload(&build_ai_recommendations_path(movie_name))
            .await
            .map_err(|failure| failure.with_message("Failed to load AI recommendations"))
    }

    /// Natural-language catalog query.
    ///
    /// # Errors
    ///
    /// Returns an error messaged `Failed to load AI search results` for
    /// every failure class.
    pub async fn ai_search(&self, prompt: &str) -> Result<Vec<Movie>, ApiError> {
        let body = AiSearchRequest {
            prompt: prompt.to_string(),
        };
        self.post_payload("/movies/ai-search", &body)
            .await
            .map_err(|failure| failure.with_message("Failed to load AI search results"))
    }

    /// Sign in.
    ///
    /// # Errors
    ///
    /// Returns the server's reason when the response envelope carries one,
    /// `Invalid email or password` otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_payload("/auth/login", &body)
            .await
            .map_err(|failure| failure.with_server_reason("Invalid email or password"))
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns the server's reason when the response envelope carries one,
    /// `Registration failed` otherwise.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_payload("/auth/signup", &body)
            .await
            .map_err(|failure| failure.with_server_reason("Registration failed"))
    }

    /// Replace the user's favorites list; returns the updated user.
    ///
    /// # Errors
    ///
    /// Returns an error messaged `Failed to update favorites` for every
    /// failure class.
    pub async fn update_favorites(
        &self,
        user_id: &str,
        favorites: Vec<String>,
    ) -> Result<User, ApiError> {
        let body = FavoritesUpdateRequest { favorites };
        self.post_payload(&build_favorites_path(user_id), &body)
            .await
            .map_err(|failure| failure.with_message("Failed to update favorites"))
    }
}

/// Movie list from a fetch whose failure has no page surface. The error
/// still reaches the console before the empty list goes out.
#[must_use]
pub fn list_or_empty(result: Result<Vec<Movie>, ApiError>) -> Vec<Movie> {
    result.unwrap_or_else(|error| {
        console::error!("movie fetch failed", error.to_string());
        Vec::new()
    })
}
