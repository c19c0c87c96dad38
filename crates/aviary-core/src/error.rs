//! Error types for aviary-core
//!
//! Every registry failure is a validation failure: the operation aborts
//! without mutating anything and the caller surfaces a notification. There
//! are no I/O, not-found, or transient kinds in this simulated design --
//! operations on unknown ids are defined as no-ops, and the simulated
//! backend cannot fail once preconditions pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required account field is empty
    EmptyField,
    /// Bulk registration count out of range
    InvalidBatchSize,
    /// Post text is empty
    EmptyPost,
    /// Post text exceeds the character limit
    PostTooLong,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::EmptyField => write!(f, "EMPTY_FIELD"),
            ErrorCode::InvalidBatchSize => write!(f, "INVALID_BATCH_SIZE"),
            ErrorCode::EmptyPost => write!(f, "EMPTY_POST"),
            ErrorCode::PostTooLong => write!(f, "POST_TOO_LONG"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation rejected, nothing changed
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for aviary-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Required field is empty: {field}")]
    EmptyField { field: String },

    #[error("Batch size out of range: {given} (expected 1 to {max})")]
    InvalidBatchSize { given: usize, max: usize },

    #[error("Post text cannot be empty")]
    EmptyPost,

    #[error("Post exceeds {max} characters: {given}")]
    PostTooLong { given: usize, max: usize },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::EmptyField { .. } => ErrorCode::EmptyField,
            CoreError::InvalidBatchSize { .. } => ErrorCode::InvalidBatchSize,
            CoreError::EmptyPost => ErrorCode::EmptyPost,
            CoreError::PostTooLong { .. } => ErrorCode::PostTooLong,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        // Validation failures abort cleanly and are recovered locally
        ErrorSeverity::Warning
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::EmptyField { field } => {
                details = details.with_suggestion(format!(
                    "Fill in the '{}' field before submitting.",
                    field
                ));
            }
            CoreError::InvalidBatchSize { given, max } => {
                details = details
                    .with_detail(serde_json::json!({ "given": given, "max": max }))
                    .with_suggestion(format!("Choose a batch size between 1 and {}.", max));
            }
            CoreError::EmptyPost => {
                details =
                    details.with_suggestion("Write some post text before publishing.".to_string());
            }
            CoreError::PostTooLong { given, max } => {
                details = details
                    .with_detail(serde_json::json!({ "given": given, "max": max }))
                    .with_suggestion(format!("Shorten the post by {} characters.", given - max));
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::EmptyField.to_string(), "EMPTY_FIELD");
        assert_eq!(ErrorCode::InvalidBatchSize.to_string(), "INVALID_BATCH_SIZE");
        assert_eq!(ErrorCode::EmptyPost.to_string(), "EMPTY_POST");
        assert_eq!(ErrorCode::PostTooLong.to_string(), "POST_TOO_LONG");
    }

    #[test]
    fn test_core_error_code() {
        let error = CoreError::EmptyField {
            field: "username".to_string(),
        };
        assert_eq!(error.code(), ErrorCode::EmptyField);

        let error = CoreError::EmptyPost;
        assert_eq!(error.code(), ErrorCode::EmptyPost);
    }

    #[test]
    fn test_all_core_errors_are_warnings() {
        let errors = [
            CoreError::EmptyField {
                field: "email".to_string(),
            },
            CoreError::InvalidBatchSize { given: 11, max: 10 },
            CoreError::EmptyPost,
            CoreError::PostTooLong {
                given: 300,
                max: 280,
            },
        ];
        for error in errors {
            assert_eq!(error.severity(), ErrorSeverity::Warning);
        }
    }

    #[test]
    fn test_error_details_post_too_long() {
        let error = CoreError::PostTooLong {
            given: 300,
            max: 280,
        };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::PostTooLong);
        assert!(details.details.is_some());
        assert!(details.suggestions[0].contains("20"));
    }

    #[test]
    fn test_error_details_builder() {
        let details = ErrorDetails::new(ErrorCode::EmptyField, "Required field is empty".to_string())
            .with_detail(serde_json::json!({"field": "token"}))
            .with_suggestion("Provide an API token.".to_string());

        assert_eq!(details.code, ErrorCode::EmptyField);
        assert!(details.details.is_some());
        assert_eq!(details.suggestions.len(), 1);
        assert!(details.to_string().contains("EMPTY_FIELD"));
    }
}
