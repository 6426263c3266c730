//! Custom error types for the daycare ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::SubjectKind;

/// The main error type for daycare operations
#[derive(Error, Debug)]
pub enum DaycareError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Check-out requested for a subject with no attendance record today
    #[error("{kind} has not {} in today.", .kind.arrival_verb())]
    NotCheckedIn { kind: SubjectKind },

    /// Username/password pair did not match a stored user
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Attachment copy or removal errors
    #[error("Attachment error: {0}")]
    Attachment(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DaycareError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for children
    pub fn child_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Child",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for employees
    pub fn employee_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Employee",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Recoverable conditions that should be reported as a warning and leave
    /// the session running
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NotCheckedIn { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DaycareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DaycareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for DaycareError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<csv::Error> for DaycareError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for daycare operations
pub type DaycareResult<T> = Result<T, DaycareError>;
