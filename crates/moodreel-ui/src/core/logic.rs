//! Pure request-building and formatting helpers extracted for non-wasm testing.

use urlencoding::encode;

/// A typed query parameter value: one scalar or a list of scalars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    /// Encoded as `key=value`.
    Scalar(String),
    /// Encoded as repeated `key[]=value` pairs.
    List(Vec<String>),
}

impl QueryValue {
    /// Single-valued parameter.
    #[must_use]
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// List-valued parameter.
    #[must_use]
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Encode parameters in declaration order. Keys and values are
/// percent-encoded; the `[]` list marker is emitted verbatim.
#[must_use]
pub fn encode_query(params: &[(&str, QueryValue)]) -> String {
    let mut parts = Vec::new();
    for (key, value) in params {
        match value {
            QueryValue::Scalar(value) => {
                parts.push(format!("{}={}", encode(key), encode(value)));
            }
            QueryValue::List(values) => {
                for value in values {
                    parts.push(format!("{}[]={}", encode(key), encode(value)));
                }
            }
        }
    }
    parts.join("&")
}

/// Join base, path, and an optional encoded query.
#[must_use]
pub fn request_url(base: &str, path: &str, params: &[(&str, QueryValue)]) -> String {
    let mut url = format!("{base}{path}");
    let query = encode_query(params);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Percent-encode one path segment.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    encode(segment).into_owned()
}

/// Path of the single-movie endpoint.
#[must_use]
pub fn build_movie_path(id: &str) -> String {
    format!("/movies/{}", encode_segment(id))
}

/// Path of the title-search endpoint.
#[must_use]
pub fn build_search_path(query: &str) -> String {
    format!("/movies/search/{}", encode_segment(query))
}

/// Path of the genre filter endpoint.
#[must_use]
pub fn build_genre_path(genre: &str) -> String {
    format!("/movies/genre/{}", encode_segment(genre))
}

/// Path of the mood filter endpoint.
#[must_use]
pub fn build_mood_path(mood: &str) -> String {
    format!("/movies/mood/{}", encode_segment(mood))
}

/// Path of the personalized recommendations endpoint.
#[must_use]
pub fn build_recommended_path(user_id: &str) -> String {
    format!("/movies/recommended/{}", encode_segment(user_id))
}

/// Path of the similarity recommendations endpoint.
#[must_use]
pub fn build_ai_recommendations_path(movie_name: &str) -> String {
    format!("/movies/ai/recommendations/{}", encode_segment(movie_name))
}

/// Path of the favorites replacement endpoint.
#[must_use]
pub fn build_favorites_path(user_id: &str) -> String {
    format!("/auth/users/{}/favorites", encode_segment(user_id))
}

/// Compose the API base from window-location pieces. `protocol` keeps its
/// trailing colon (`"http:"`), matching `Location::protocol`. The trunk dev
/// port maps to the backend port; any other explicit port is kept.
#[must_use]
pub fn compose_api_base(protocol: &str, hostname: &str, port: &str) -> String {
    let mapped = match port {
        "" => None,
        "8080" => Some("5000"),
        other => Some(other),
    };
    let mut base = format!("{protocol}//{hostname}");
    if let Some(port) = mapped {
        base.push(':');
        base.push_str(port);
    }
    base.push_str("/api");
    base
}

/// Elapsed-seconds label in `m:ss`.
#[must_use]
pub fn format_seconds(total: u32) -> String {
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{minutes}:{seconds:02}")
}

/// Playback progress percentage, zero when the duration is unknown.
#[must_use]
pub fn progress_percent(current: u32, duration: u32) -> f64 {
    if duration == 0 {
        0.0
    } else {
        f64::from(current) / f64::from(duration) * 100.0
    }
}

/// Embed URL with playback flags for the clip iframe.
#[must_use]
pub fn embed_url(base: &str, autoplay: bool, muted: bool) -> String {
    format!(
        "{base}?autoplay={}&mute={}&enablejsapi=1",
        u8::from(autoplay),
        u8::from(muted)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_query_handles_scalars_and_lists() {
        let query = encode_query(&[
            ("mood", QueryValue::scalar("Feel Good")),
            ("genres", QueryValue::list(["Sci-Fi", "Film & TV"])),
        ]);
        assert_eq!(query, "mood=Feel%20Good&genres[]=Sci-Fi&genres[]=Film%20%26%20TV");
    }

    #[test]
    fn encode_query_skips_nothing_for_empty_lists() {
        let query = encode_query(&[
            ("genres", QueryValue::list(Vec::<String>::new())),
            ("q", QueryValue::scalar("batman")),
        ]);
        assert_eq!(query, "q=batman");
    }

    #[test]
    fn request_url_omits_question_mark_without_params() {
        assert_eq!(
            request_url("http://127.0.0.1:5000/api", "/movies", &[]),
            "http://127.0.0.1:5000/api/movies"
        );
    }

    #[test]
    fn paths_encode_user_text() {
        assert_eq!(build_movie_path("603"), "/movies/603");
        assert_eq!(build_search_path("the matrix"), "/movies/search/the%20matrix");
        assert_eq!(build_genre_path("Sci-Fi"), "/movies/genre/Sci-Fi");
        assert_eq!(build_mood_path("Melancholic"), "/movies/mood/Melancholic");
        assert_eq!(build_recommended_path("u-42"), "/movies/recommended/u-42");
        assert_eq!(
            build_ai_recommendations_path("Spirited Away"),
            "/movies/ai/recommendations/Spirited%20Away"
        );
        assert_eq!(build_favorites_path("u/1"), "/auth/users/u%2F1/favorites");
    }

    #[test]
    fn api_base_maps_the_dev_port() {
        assert_eq!(
            compose_api_base("http:", "127.0.0.1", "8080"),
            "http://127.0.0.1:5000/api"
        );
        assert_eq!(
            compose_api_base("https:", "moodreel.app", ""),
            "https://moodreel.app/api"
        );
        assert_eq!(
            compose_api_base("http:", "localhost", "3000"),
            "http://localhost:3000/api"
        );
    }

    #[test]
    fn seconds_format_pads_to_two_digits() {
        assert_eq!(format_seconds(0), "0:00");
        assert_eq!(format_seconds(5), "0:05");
        assert_eq!(format_seconds(90), "1:30");
        assert_eq!(format_seconds(600), "10:00");
    }

    #[test]
    fn progress_is_zero_for_unknown_duration() {
        assert!((progress_percent(30, 0) - 0.0).abs() < f64::EPSILON);
        assert!((progress_percent(30, 120) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn embed_url_carries_playback_flags() {
        assert_eq!(
            embed_url("https://www.youtube.com/embed/zSWdZVtXT7E", true, false),
            "https://www.youtube.com/embed/zSWdZVtXT7E?autoplay=1&mute=0&enablejsapi=1"
        );
        assert_eq!(
            embed_url("https://www.youtube.com/embed/zSWdZVtXT7E", false, true),
            "https://www.youtube.com/embed/zSWdZVtXT7E?autoplay=0&mute=1&enablejsapi=1"
        );
    }
}
