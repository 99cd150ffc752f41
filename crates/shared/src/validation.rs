//! Common validation utilities.

use chrono::NaiveDate;
use validator::ValidationError;

/// Calendar date format used by event and quotation dates.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that a donation amount is strictly positive and finite.
pub fn validate_positive_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must be greater than zero".into());
        Err(err)
    }
}

/// Validates that a text field has at least one non-whitespace character.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("This field is required".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Parses a `YYYY-MM-DD` calendar date, tolerating surrounding whitespace.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CALENDAR_DATE_FORMAT).ok()
}

/// Parses a user-typed amount such as `"1000"` or `" 1500.50 "`.
///
/// Returns `None` for blank input, non-numeric input, or values that fail
/// [`validate_positive_amount`].
pub fn parse_amount(value: &str) -> Option<f64> {
    let amount: f64 = value.trim().parse().ok()?;
    validate_positive_amount(amount).ok()?;
    Some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount(1000.0).is_ok());
        assert!(validate_positive_amount(0.01).is_ok());
        assert!(validate_positive_amount(0.0).is_err());
        assert!(validate_positive_amount(-5.0).is_err());
        assert!(validate_positive_amount(f64::NAN).is_err());
        assert!(validate_positive_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_positive_amount_message() {
        let err = validate_positive_amount(0.0).unwrap_err();
        assert_eq!(err.code, "amount_range");
        assert_eq!(
            err.message.unwrap().to_string(),
            "Amount must be greater than zero"
        );
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Jane").is_ok());
        assert!(validate_required("").is_err());
        assert!(validate_required("   ").is_err());
        assert!(validate_required("\t\n").is_err());
    }

    #[test]
    fn test_parse_calendar_date() {
        let date = parse_calendar_date("2024-03-17").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
        assert_eq!(
            parse_calendar_date(" 2024-04-05 "),
            NaiveDate::from_ymd_opt(2024, 4, 5)
        );
        assert!(parse_calendar_date("17/03/2024").is_none());
        assert!(parse_calendar_date("2024-02-30").is_none());
        assert!(parse_calendar_date("").is_none());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000"), Some(1000.0));
        assert_eq!(parse_amount(" 1500.50 "), Some(1500.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-200"), None);
    }
}
