//! Client-side signup validation.

/// Minimum accepted password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Check a signup password against its confirmation. The mismatch message
/// wins when both rules fail, so the user fixes the typo first.
///
/// # Errors
///
/// Returns the message to show under the confirmation field.
pub fn validate_signup(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password != confirmation {
        return Err("Passwords don't match");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_password_of_minimum_length() {
        assert_eq!(validate_signup("password123", "password123"), Ok(()));
        assert_eq!(validate_signup("12345678", "12345678"), Ok(()));
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(
            validate_signup("1234567", "1234567"),
            Err("Password must be at least 8 characters")
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        assert_eq!(
            validate_signup("password123", "password124"),
            Err("Passwords don't match")
        );
    }

    #[test]
    fn mismatch_outranks_length() {
        assert_eq!(
            validate_signup("short", "shor"),
            Err("Passwords don't match")
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate_signup("pässwörd", "pässwörd"), Ok(()));
    }
}
