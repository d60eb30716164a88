//! # Shell Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                  Error Flow in stockbook                      │
//! │                                                               │
//! │  User input                  Core                             │
//! │  ──────────                  ────                             │
//! │                                                               │
//! │  "add Pen true 10"                                            │
//! │         │                                                     │
//! │         ▼                                                     │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │  Command Function: Result<String, AppError>             │  │
//! │  │                                                         │  │
//! │  │  ValidationError ──► AppError { InvalidType, msg } ───► │  │
//! │  │  InventoryError ───► AppError { NotFound, msg } ──────► │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! │         │                                                     │
//! │         ▼                                                     │
//! │  Menu loop prints the message and shows the menu again.       │
//! │  Invalid input NEVER terminates the process.                  │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stockbook_core::{InventoryError, ValidationError};

/// Error surfaced by a menu action.
///
/// Carries a machine-readable `code` and the human-readable `message`
/// the menu prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input had the wrong shape (text where a number was required)
    InvalidType,

    /// Input had the right shape but violated a domain rule
    InvalidValue,

    /// A product with that name already exists
    Duplicate,

    /// No product with that name exists
    NotFound,

    /// Reading input or writing output failed (catch-all)
    Io,
}

impl AppError {
    /// Creates a new shell error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }
}

/// Converts field validation failures to shell errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::InvalidType { .. } => ErrorCode::InvalidType,
            ValidationError::InvalidValue { .. } => ErrorCode::InvalidValue,
        };
        AppError::new(code, err.to_string())
    }
}

/// Converts inventory operation failures to shell errors.
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::DuplicateName { .. } => {
                AppError::new(ErrorCode::Duplicate, err.to_string())
            }
            InventoryError::NotFound { .. } => AppError::new(ErrorCode::NotFound, err.to_string()),
            InventoryError::Validation(inner) => AppError::from(inner),
        }
    }
}

/// Converts I/O failures (the unexpected-error catch-all).
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Io, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_mapping() {
        let err = AppError::from(stockbook_core::input::parse_price("abc").unwrap_err());
        assert_eq!(err.code, ErrorCode::InvalidType);
        assert_eq!(err.message, "price must be a number, got 'abc'");

        let err = AppError::from(
            stockbook_core::Product::new("Pen", -1.0, 1).unwrap_err(),
        );
        assert_eq!(err.code, ErrorCode::InvalidValue);
    }

    #[test]
    fn test_inventory_error_mapping() {
        let err = AppError::from(InventoryError::NotFound {
            name: "Pen".to_string(),
        });
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "product 'Pen' not found");

        let err = AppError::from(InventoryError::DuplicateName {
            name: "Pen".to_string(),
        });
        assert_eq!(err.code, ErrorCode::Duplicate);
    }

    #[test]
    fn test_lifted_validation_keeps_its_code() {
        let core_err = InventoryError::Validation(
            stockbook_core::input::parse_name(" ").unwrap_err(),
        );
        let err = AppError::from(core_err);
        assert_eq!(err.code, ErrorCode::InvalidValue);
    }
}
