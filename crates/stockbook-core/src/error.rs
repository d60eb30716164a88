//! # Error Types
//!
//! Domain-specific error types for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        Error Types                            │
//! │                                                               │
//! │  stockbook-core errors (this file)                            │
//! │  ├── ValidationError  - a single field failed a check         │
//! │  └── InventoryError   - a collection operation failed         │
//! │                                                               │
//! │  Terminal app errors (apps/terminal)                          │
//! │  └── AppError         - what the user sees at the menu        │
//! │                                                               │
//! │  Flow: ValidationError → InventoryError → AppError → screen   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single-field validation failure.
///
/// Raised by `Product` construction and setters, and by the raw-text
/// parsers in [`crate::input`]. Two kinds are distinguished:
///
/// - [`ValidationError::InvalidType`] — the input's runtime shape is wrong
///   (text that is not a number, a boolean where an integer is required).
///   Only the raw-text boundary can produce this; typed Rust calls cannot.
/// - [`ValidationError::InvalidValue`] — the shape is right but the value
///   violates a domain rule (negative price, empty name).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input does not have the required kind.
    #[error("{field} must be {expected}, got '{value}'")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// The input has the right kind but violates a domain constraint.
    #[error("{field} {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Shorthand for an [`ValidationError::InvalidValue`].
    pub(crate) fn invalid_value(field: &'static str, reason: &'static str) -> Self {
        ValidationError::InvalidValue { field, reason }
    }

    /// Shorthand for an [`ValidationError::InvalidType`].
    pub(crate) fn invalid_type(
        field: &'static str,
        expected: &'static str,
        value: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidType {
            field,
            expected,
            value: value.into(),
        }
    }
}

// =============================================================================
// Inventory Error
// =============================================================================

/// Errors raised by [`crate::Inventory`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A product with the same name (case-insensitive) already exists.
    #[error("product '{name}' already exists")]
    DuplicateName { name: String },

    /// Lookup by name yielded no match.
    #[error("product '{name}' not found")]
    NotFound { name: String },

    /// A field failed validation before the operation ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for field validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience alias for inventory operation results.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::invalid_type("price", "a number", "abc");
        assert_eq!(err.to_string(), "price must be a number, got 'abc'");

        let err = ValidationError::invalid_value("price", "cannot be negative");
        assert_eq!(err.to_string(), "price cannot be negative");
    }

    #[test]
    fn test_inventory_error_messages() {
        let err = InventoryError::DuplicateName {
            name: "Pen".to_string(),
        };
        assert_eq!(err.to_string(), "product 'Pen' already exists");

        let err = InventoryError::NotFound {
            name: "Stapler".to_string(),
        };
        assert_eq!(err.to_string(), "product 'Stapler' not found");
    }

    #[test]
    fn test_validation_converts_to_inventory_error() {
        let validation_err = ValidationError::invalid_value("name", "cannot be empty");
        let inv_err: InventoryError = validation_err.clone().into();
        assert_eq!(inv_err, InventoryError::Validation(validation_err));
        // Transparent: the wrapped message passes through unchanged.
        assert_eq!(inv_err.to_string(), "name cannot be empty");
    }
}
