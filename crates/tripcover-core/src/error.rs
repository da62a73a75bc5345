//! # Error Types
//!
//! Domain-specific error types for tripcover-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tripcover-core errors (this file)                                      │
//! │  ├── QuoteError       - Quote computation failures                      │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  tripcover-config errors (separate crate)                               │
//! │  └── ConfigError      - Snapshot loading/parsing failures               │
//! │                                                                         │
//! │  Flow: ValidationError → QuoteError → CLI/storefront message            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (category, zone name, age)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Quote Error
// =============================================================================

/// Quote computation errors.
///
/// These errors represent a request or configuration the engine cannot
/// price. They should be caught at the boundary and translated to
/// user-friendly messages; a failed quote never yields a partial price.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// No plan in the catalog matches the requested category.
    ///
    /// ## When This Occurs
    /// - Category string matches no plan name under the active match mode
    /// - Plan was removed from the catalog by the back office
    #[error("No plan matches category '{category}'")]
    PlanNotFound { category: String },

    /// No zone in the catalog has the requested name.
    ///
    /// Zone names are compared exactly (case-sensitive), so `"europa"`
    /// does not match a zone named `"Europa"`.
    #[error("Zone not found: '{zone}'")]
    ZoneNotFound { zone: String },

    /// A quote for zero travelers is meaningless.
    #[error("At least one traveler is required")]
    EmptyTravelerList,

    /// Trip duration must be at least one day.
    ///
    /// ## When This Occurs
    /// - Date pickers on the storefront allow same-day return selections
    /// - A caller forwards an unchecked duration of 0
    #[error("Trip duration must be at least 1 day (got {duration})")]
    InvalidDuration { duration: u32 },

    /// The pricing configuration itself is unusable.
    ///
    /// ## When This Occurs
    /// - Empty plan catalog
    /// - Non-positive zone or bracket multiplier
    /// - Negative base price or tax/commission rate
    /// - Bracket with `min > max`
    #[error("Invalid pricing configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A traveler's age is covered by no configured bracket.
    ///
    /// Only raised as a hard error under [`BracketFallback::Reject`];
    /// the default policy prices the traveler at the unmultiplied base
    /// daily price and attaches a warning to the quote instead.
    ///
    /// [`BracketFallback::Reject`]: crate::types::BracketFallback::Reject
    #[error("No age bracket covers traveler {traveler_index} (age {age})")]
    AgeBracketUnmatched { traveler_index: usize, age: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation at the storefront/CLI boundary before the
/// engine runs.
#[derive(Debug, Error)]
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

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, malformed age list).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QuoteError::PlanNotFound {
            category: "platinum".to_string(),
        };
        assert_eq!(err.to_string(), "No plan matches category 'platinum'");

        let err = QuoteError::ZoneNotFound {
            zone: "Atlantida".to_string(),
        };
        assert_eq!(err.to_string(), "Zone not found: 'Atlantida'");

        let err = QuoteError::InvalidDuration { duration: 0 };
        assert_eq!(
            err.to_string(),
            "Trip duration must be at least 1 day (got 0)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "category".to_string(),
        };
        assert_eq!(err.to_string(), "category is required");

        let err = ValidationError::TooLong {
            field: "zone".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "zone must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_quote_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let quote_err: QuoteError = validation_err.into();
        assert!(matches!(quote_err, QuoteError::Validation(_)));
    }
}
