use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::shared::constants::{MAX_LATITUDE, MAX_LONGITUDE};

lazy_static! {
    /// Regex for text fields that must carry at least one visible character
    /// - Valid: "Lotus Valley", "  DPS  "
    /// - Invalid: "", "   ", "\t\n"
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

fn coordinate_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Latitude must be a finite number in [-90, 90]
pub fn validate_latitude(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value.abs() <= MAX_LATITUDE {
        Ok(())
    } else {
        Err(coordinate_error(
            "latitude",
            "Please enter a valid latitude (-90 to 90)",
        ))
    }
}

/// Longitude must be a finite number in [-180, 180]
pub fn validate_longitude(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value.abs() <= MAX_LONGITUDE {
        Ok(())
    } else {
        Err(coordinate_error(
            "longitude",
            "Please enter a valid longitude (-180 to 180)",
        ))
    }
}

/// Flatten validator output into user-facing messages, ordered by field name.
///
/// A field failing several rules with the same message reports it once.
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let mut messages = Vec::new();
    for (field, kind) in fields {
        if let ValidationErrorsKind::Field(field_errors) = kind {
            let mut field_messages: Vec<String> = Vec::new();
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for {}", field),
                };
                if !field_messages.contains(&message) {
                    field_messages.push(message);
                }
            }
            messages.extend(field_messages);
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_regex() {
        assert!(NOT_BLANK_REGEX.is_match("Lotus Valley"));
        assert!(NOT_BLANK_REGEX.is_match("  DPS  "));
        assert!(!NOT_BLANK_REGEX.is_match(""));
        assert!(!NOT_BLANK_REGEX.is_match("   "));
        assert!(!NOT_BLANK_REGEX.is_match("\t\n"));
    }

    #[test]
    fn test_latitude_bounds() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0001).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
        assert!(validate_latitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(-180.5).is_err());
        assert!(validate_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_collect_messages_sorted_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "longitude",
            coordinate_error("longitude", "Please enter a valid longitude (-180 to 180)"),
        );
        errors.add("address", ValidationError::new("length"));

        assert_eq!(
            collect_messages(&errors),
            vec![
                "Invalid value for address".to_string(),
                "Please enter a valid longitude (-180 to 180)".to_string(),
            ]
        );
    }

    #[test]
    fn test_collect_messages_reports_field_once() {
        let mut errors = ValidationErrors::new();
        let name_error = || {
            ValidationError::new("length")
                .with_message(Cow::Borrowed("Please enter a valid school name (2-100 characters)"))
        };
        errors.add("name", name_error());
        errors.add("name", name_error());
        errors.add("address", ValidationError::new("regex"));

        assert_eq!(
            collect_messages(&errors),
            vec![
                "Invalid value for address".to_string(),
                "Please enter a valid school name (2-100 characters)".to_string(),
            ]
        );
    }
}
