//! Error types for the assignment tracker
//!
//! None of these are fatal. Validation failures mean "leave the form as it is",
//! `NotFound` means "ignore the request", and the parse errors only ever come
//! from host input.

use crate::assignment::AssignmentId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Assignment name is required")]
    MissingName,
    #[error("Due date is required")]
    MissingDueDate,
    #[error("Assignment {0} does not exist")]
    NotFound(AssignmentId),
    #[error("Invalid filter '{0}'. Valid filters: all, on_track, late, blocked")]
    InvalidFilter(String),
    #[error("Invalid assignment ID '{0}'")]
    InvalidId(String),
    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    UnknownCommand(String),
}

impl TrackerError {
    /// True for the errors that reject a submitted form
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::MissingName | TrackerError::MissingDueDate)
    }
}

pub type Result<T, E = TrackerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_validation() {
        assert!(TrackerError::MissingName.is_validation());
        assert!(TrackerError::MissingDueDate.is_validation());
        assert!(!TrackerError::NotFound(AssignmentId(1)).is_validation());
        assert!(!TrackerError::InvalidFilter("x".to_string()).is_validation());
    }
}
