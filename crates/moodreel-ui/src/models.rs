//! UI-local models and product constants.

/// Transient notification rendered by the toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u64,
    /// Display text.
    pub message: String,
    /// Visual tone.
    pub kind: ToastKind,
}

/// Visual tone of a [`Toast`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral notice.
    Info,
    /// Confirmation of a completed action.
    Success,
    /// Failed action.
    Error,
}

/// Embedded clip shown by the detail-page player.
pub const VIDEO_CLIP_URL: &str = "https://www.youtube.com/embed/zSWdZVtXT7E";

/// Stock backdrops used when a movie has no poster of its own.
pub const FALLBACK_POSTERS: [&str; 3] = [
    "https://images.unsplash.com/photo-1605810230434-7631ac76ec81",
    "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5",
    "https://images.unsplash.com/photo-1721322800607-8c38375eef04",
];

/// Pick a fallback poster from a `0.0..1.0` roll.
#[must_use]
pub fn fallback_poster(roll: f64) -> &'static str {
    let scaled = roll.clamp(0.0, 1.0) * 3.0;
    let index = if scaled < 1.0 {
        0
    } else if scaled < 2.0 {
        1
    } else {
        2
    };
    FALLBACK_POSTERS[index]
}

/// Emoji shown next to a mood tag. Unknown moods get a neutral reel.
#[must_use]
pub fn mood_emoji(mood: &str) -> &'static str {
    match mood {
        "Excited" => "🎢",
        "Happy" => "😊",
        "Relaxed" => "😌",
        "Thoughtful" => "🤔",
        "Melancholic" => "😢",
        "Tense" => "😰",
        "Inspired" => "✨",
        "Nostalgic" => "🕰️",
        _ => "🎬",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_poster_covers_roll_range() {
        assert_eq!(fallback_poster(0.0), FALLBACK_POSTERS[0]);
        assert_eq!(fallback_poster(0.5), FALLBACK_POSTERS[1]);
        assert_eq!(fallback_poster(0.99), FALLBACK_POSTERS[2]);
        // 1.0 is outside Math.random's half-open range.
        assert_eq!(fallback_poster(1.0), FALLBACK_POSTERS[2]);
    }

    #[test]
    fn mood_emoji_falls_back_for_unknown_tags() {
        assert_eq!(mood_emoji("Excited"), "🎢");
        assert_eq!(mood_emoji("Relaxed"), "😌");
        assert_eq!(mood_emoji("Brooding"), "🎬");
    }
}
