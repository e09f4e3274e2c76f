//! # Error Types
//!
//! Domain-specific error types for factura-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  factura-core errors (this file)                                       │
//! │  ├── CoreError        - Invoice and tax rule failures                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  └── ConsoleError     - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → stderr             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, category, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::Category;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An item could not be constructed.
    ///
    /// ## When This Occurs
    /// - Name is empty or whitespace only
    /// - Price is negative or above `MAX_PRICE_CENTS`
    ///
    /// The item never exists, so it can never enter an invoice.
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ValidationError),

    /// An invoice holds an item whose category has no registered tax policy.
    ///
    /// ## User Workflow
    /// ```text
    /// Invoice: [Bread (Food), Laptop (Electronics)]
    /// Registry: { Food → 5% }
    ///      │
    ///      ▼
    /// total_tax()
    ///      │
    ///      ▼
    /// MissingTaxRule { category: Electronics }
    ///      │
    ///      ▼
    /// Console shows: "No tax rule registered for category: Electronics"
    /// ```
    ///
    /// Raised again on every call until the registry or the invoice changes.
    #[error("No tax rule registered for category: {category}")]
    MissingTaxRule { category: Category },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., price text that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tax_rule_names_category() {
        let err = CoreError::MissingTaxRule {
            category: Category::Electronics,
        };
        assert_eq!(
            err.to_string(),
            "No tax rule registered for category: Electronics"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_invalid_item() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidItem(_)));
        assert_eq!(core_err.to_string(), "Invalid item: name is required");
    }
}
