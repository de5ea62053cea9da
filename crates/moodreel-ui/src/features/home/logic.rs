//! Home page planning helpers.

/// Genres given a fixed row each on the home page.
pub const GENRE_ROWS: [&str; 3] = ["Action", "Drama", "Comedy"];

/// Index of the hero pick given a catalog size and a random roll in `0..1`.
/// `None` for an empty catalog; out-of-range rolls clamp into the list.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn featured_index(len: usize, roll: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let scaled = (roll.clamp(0.0, 1.0) * len as f64) as usize;
    Some(scaled.min(len - 1))
}

/// Heading for a genre or mood row.
#[must_use]
pub fn row_title(name: &str) -> String {
    format!("{name} Movies")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_has_no_featured_pick() {
        assert_eq!(featured_index(0, 0.5), None);
    }

    #[test]
    fn roll_scales_across_the_catalog() {
        assert_eq!(featured_index(10, 0.0), Some(0));
        assert_eq!(featured_index(10, 0.55), Some(5));
        assert_eq!(featured_index(10, 0.999), Some(9));
    }

    #[test]
    fn out_of_range_rolls_clamp_into_the_list() {
        assert_eq!(featured_index(10, 1.0), Some(9));
        assert_eq!(featured_index(10, 7.3), Some(9));
        assert_eq!(featured_index(10, -0.4), Some(0));
    }

    #[test]
    fn row_titles_append_the_suffix() {
        assert_eq!(row_title("Action"), "Action Movies");
        assert_eq!(row_title("Nostalgic"), "Nostalgic Movies");
    }
}
