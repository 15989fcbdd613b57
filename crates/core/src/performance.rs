//! Performance rating vocabulary.

use crate::error::CoreError;

/// Lowest valid performance rating.
pub const MIN_RATING: i32 = 1;
/// Highest valid performance rating.
pub const MAX_RATING: i32 = 5;

/// Human-readable label for a 1-5 rating.
///
/// Returns `None` for out-of-range values.
pub fn rating_label(rating: i32) -> Option<&'static str> {
    match rating {
        1 => Some("Poor"),
        2 => Some("Below Average"),
        3 => Some("Average"),
        4 => Some("Good"),
        5 => Some("Excellent"),
        _ => None,
    }
}

/// Reject ratings outside the 1-5 scale.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ratings_have_labels() {
        assert_eq!(rating_label(1), Some("Poor"));
        assert_eq!(rating_label(3), Some("Average"));
        assert_eq!(rating_label(5), Some("Excellent"));
        assert_eq!(rating_label(0), None);
        assert_eq!(rating_label(6), None);
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
