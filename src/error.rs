//! Custom error types for QuickSplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for QuickSplit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// Expense amount was zero or negative
    #[error("Expense amount must be positive (got {0})")]
    InvalidAmount(f64),

    /// Split requested before any participant was registered
    #[error("No participants registered. Add participants before reviewing expenses.")]
    NoParticipants,
}

impl SplitError {
    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a no-participants error
    pub fn is_no_participants(&self) -> bool {
        matches!(self, Self::NoParticipants)
    }
}

/// Result type alias for QuickSplit operations
pub type SplitResult<T> = Result<T, SplitError>;
