//! Display formatting for the HTML views.

/// Formats a numeric value as a whole number with `.` as the thousands
/// separator, independent of system locale.
///
/// The value is rounded half away from zero first; non-finite input falls
/// back to 0 rather than failing the render.
#[must_use]
pub fn fmt_int(value: f64) -> String {
    let whole = if value.is_finite() {
        crate::core::balance::round_to_i64(value)
    } else {
        0
    };
    group_thousands(whole)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_int_small_values_ungrouped() {
        assert_eq!(fmt_int(0.0), "0");
        assert_eq!(fmt_int(7.0), "7");
        assert_eq!(fmt_int(999.0), "999");
    }

    #[test]
    fn test_fmt_int_groups_with_dots() {
        assert_eq!(fmt_int(1000.0), "1.000");
        assert_eq!(fmt_int(1_234_567.0), "1.234.567");
        assert_eq!(fmt_int(10_000_000.0), "10.000.000");
    }

    #[test]
    fn test_fmt_int_rounds_before_grouping() {
        assert_eq!(fmt_int(1234.6), "1.235");
        assert_eq!(fmt_int(999.5), "1.000");
    }

    #[test]
    fn test_fmt_int_negative_values() {
        assert_eq!(fmt_int(-1234.0), "-1.234");
        assert_eq!(fmt_int(-999.0), "-999");
    }

    #[test]
    fn test_fmt_int_non_finite_falls_back_to_zero() {
        assert_eq!(fmt_int(f64::NAN), "0");
        assert_eq!(fmt_int(f64::INFINITY), "0");
        assert_eq!(fmt_int(f64::NEG_INFINITY), "0");
    }

    #[test]
    fn test_i64_min_does_not_panic() {
        // unsigned_abs covers the i64::MIN edge.
        assert!(group_thousands(i64::MIN).starts_with("-9.223"));
    }
}
