//! Attendance statistics arithmetic.
//!
//! The per-status counts come from the store; this module owns the
//! percentage derivation so the zero-record guard and rounding live in one
//! place.

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of days present, rounded to two decimals.
///
/// Zero recorded days yields 0.0 rather than NaN.
pub fn attendance_percentage(present_days: i64, total_days: i64) -> f64 {
    if total_days == 0 {
        return 0.0;
    }
    round2(present_days as f64 / total_days as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_days_guard() {
        assert_eq!(attendance_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_three_of_five_present() {
        assert_eq!(attendance_percentage(3, 5), 60.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 1/3 -> 33.333... -> 33.33
        assert_eq!(attendance_percentage(1, 3), 33.33);
        // 2/3 -> 66.666... -> 66.67
        assert_eq!(attendance_percentage(2, 3), 66.67);
    }

    #[test]
    fn test_full_attendance() {
        assert_eq!(attendance_percentage(20, 20), 100.0);
    }
}
