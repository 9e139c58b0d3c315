//! Validation helper functions for task input
//!
//! Everything a user types goes through here before it can reach the store:
//! descriptions, priorities and due dates.

use crate::error::ValidationError;
use crate::tasks::{DATE_FORMAT, Priority};
use chrono::NaiveDate;

/// Trim a description and reject it if nothing is left
///
/// # Arguments
/// * `description` - Raw description text
///
/// # Returns
/// The trimmed description or `ValidationError::EmptyDescription`
pub fn validate_description(description: &str) -> Result<String, ValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

/// Parse a due date in YYYY-MM-DD format
///
/// # Arguments
/// * `date_str` - Date text; surrounding whitespace is ignored
///
/// # Returns
/// `None` for an empty value, the parsed date otherwise, or
/// `ValidationError::InvalidDate` when the text is not a real calendar date
pub fn parse_due_date(date_str: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parse and validate a priority name (high, medium, low)
pub fn parse_priority(priority_str: &str) -> Result<Priority, ValidationError> {
    priority_str.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_description_trims() {
        assert_eq!(validate_description("  Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn test_validate_description_rejects_blank() {
        assert_eq!(validate_description(""), Err(ValidationError::EmptyDescription));
        assert_eq!(validate_description(" \t "), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(parse_due_date("   ").unwrap(), None);
        assert_eq!(
            parse_due_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert_eq!(
            parse_due_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_parse_due_date_rejects_invalid() {
        for bad in ["2099-13-40", "2023-02-29", "15/03/2025", "tomorrow"] {
            assert_eq!(
                parse_due_date(bad),
                Err(ValidationError::InvalidDate(bad.to_string())),
                "expected {} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert!(parse_priority("").is_err());
    }
}
