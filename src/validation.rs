use crate::error::{MailnetError, MailnetResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> MailnetResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(MailnetError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a count is positive (> 0).
pub fn positive(value: usize, field: &str) -> MailnetResult<usize> {
    if value == 0 {
        Err(MailnetError::NonPositive {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Validates a probability-like factor in the half-open range [0, 1).
pub fn unit_interval(value: f64, field: &str) -> MailnetResult<f64> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(MailnetError::OutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

/// Validates a finite, non-negative number.
pub fn non_negative_finite(value: f64, field: &str) -> MailnetResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MailnetError::OutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

/// Validates a finite, strictly positive number.
pub fn positive_finite(value: f64, field: &str) -> MailnetResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MailnetError::OutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_valid_string() {
        assert_eq!(non_blank("P1", "Id").unwrap(), "P1");
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  P1  ", "Id").unwrap(), "P1");
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(non_blank("   ", "Id").is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(positive(0, "max_iterations").is_err());
        assert_eq!(positive(3, "max_iterations").unwrap(), 3);
    }

    #[test]
    fn unit_interval_bounds() {
        assert_eq!(unit_interval(0.0, "damping").unwrap(), 0.0);
        assert_eq!(unit_interval(0.85, "damping").unwrap(), 0.85);
        assert!(unit_interval(1.0, "damping").is_err());
        assert!(unit_interval(-0.1, "damping").is_err());
        assert!(unit_interval(f64::NAN, "damping").is_err());
    }

    #[test]
    fn non_negative_finite_accepts_zero_and_above_one() {
        assert_eq!(non_negative_finite(0.0, "threshold").unwrap(), 0.0);
        assert_eq!(non_negative_finite(1.5, "threshold").unwrap(), 1.5);
    }

    #[test]
    fn non_negative_finite_rejects_negative_and_nan() {
        assert!(non_negative_finite(-0.01, "threshold").is_err());
        assert!(non_negative_finite(f64::NAN, "threshold").is_err());
        assert!(non_negative_finite(f64::INFINITY, "threshold").is_err());
    }

    #[test]
    fn positive_finite_rejects_zero() {
        assert!(positive_finite(0.0, "tolerance").is_err());
        assert_eq!(positive_finite(1e-6, "tolerance").unwrap(), 1e-6);
    }
}
