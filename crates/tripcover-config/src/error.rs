//! # Configuration Error Types
//!
//! Error types for pricing snapshot loading.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  File read error (std::io::Error)                                      │
//! │  JSON parse error (serde_json::Error)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ConfigError (this module) ← adds the invalid-document category        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI / service boundary displays an actionable message                 │
//! │                                                                         │
//! │  A malformed document is always an error here, never a crash and       │
//! │  never a silently defaulted catalog.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Pricing configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the pricing document failed.
    #[error("Failed to read pricing document: {0}")]
    Io(#[from] std::io::Error),

    /// The pricing document is not valid JSON.
    #[error("Failed to parse pricing document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but describes an unusable configuration.
    ///
    /// ## When This Occurs
    /// - Empty plan catalog
    /// - Non-positive multiplier or negative rate
    /// - Catalog id that is not a UUID
    /// - Age range with min greater than max
    #[error("Invalid pricing document: {reason}")]
    Invalid { reason: String },
}

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
