//! Search page helpers.

/// Count line under the results heading.
#[must_use]
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "Found 1 result".to_string()
    } else {
        format!("Found {count} results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(result_count_label(0), "Found 0 results");
        assert_eq!(result_count_label(1), "Found 1 result");
        assert_eq!(result_count_label(12), "Found 12 results");
    }
}
