//! Validation helper functions
//!
//! This module contains the form validation rule and the parsers for
//! host-supplied filter names and assignment IDs.

use crate::assignment::{AssignmentFields, AssignmentId, Filter};
use crate::error::{Result, TrackerError};
use tracing::warn;

/// Check that a submitted form carries the required fields
///
/// Name and due date must be non-blank. A due date that is present but not a
/// real date is accepted; it is classified as if it were missing.
///
/// # Arguments
/// * `fields` - The submitted form fields
///
/// # Returns
/// `Ok(())`, or `MissingName` / `MissingDueDate` for the first blank field
pub fn validate_fields(fields: &AssignmentFields) -> Result<()> {
    if fields.name.trim().is_empty() {
        warn!("rejected assignment without a name");
        return Err(TrackerError::MissingName);
    }
    if fields.due_date.trim().is_empty() {
        warn!(name = %fields.name.trim(), "rejected assignment without a due date");
        return Err(TrackerError::MissingDueDate);
    }
    Ok(())
}

/// Parse and validate a filter name
///
/// # Arguments
/// * `filter_str` - Filter name (all, on_track, late, blocked; `meet` is accepted too)
///
/// # Returns
/// Result containing the parsed Filter or `InvalidFilter`
pub fn parse_filter(filter_str: &str) -> Result<Filter> {
    filter_str.parse()
}

/// Parse and validate an assignment ID
///
/// # Arguments
/// * `id_str` - The ID as typed (e.g., "3" or "#3")
///
/// # Returns
/// Result containing the parsed AssignmentId or `InvalidId`
pub fn parse_id(id_str: &str) -> Result<AssignmentId> {
    id_str
        .parse()
        .map_err(|_| TrackerError::InvalidId(id_str.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let fields = AssignmentFields::new("   ", "2024-01-10");
        assert_eq!(validate_fields(&fields), Err(TrackerError::MissingName));
    }

    #[test]
    fn test_blank_due_date_is_rejected() {
        let fields = AssignmentFields::new("Essay", "");
        assert_eq!(validate_fields(&fields), Err(TrackerError::MissingDueDate));
    }

    #[test]
    fn test_unparseable_due_date_is_accepted() {
        let fields = AssignmentFields::new("Essay", "someday");
        assert!(validate_fields(&fields).is_ok());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3").unwrap().get(), 3);
        assert_eq!(parse_id("x"), Err(TrackerError::InvalidId("x".to_string())));
    }
}
