//! # Validation Module
//!
//! Input and configuration validation for Tripcover.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (TypeScript)                                      │
//! │  ├── Basic format checks (empty fields, date order)                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Boundary (CLI / API handler)                                 │
//! │  └── THIS MODULE: field validators on the assembled request            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine (calculate_quote)                                     │
//! │  ├── Hard preconditions: travelers non-empty, duration > 0             │
//! │  └── Configuration sanity (validate_config, also used by the           │
//! │      config crate when a snapshot is built)                            │
//! │                                                                         │
//! │  Defense in depth: a malformed catalog from the admin store must       │
//! │  surface as InvalidConfiguration, never as a wrong price.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{QuoteError, ValidationError};
use crate::types::{PricingConfig, Traveler};
use crate::{MAX_TRAVELERS, MAX_TRAVELER_AGE, MAX_TRIP_DAYS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a requested plan category.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed category string.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: 100,
        });
    }

    Ok(category.to_string())
}

/// Validates a requested zone name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 100 characters
///
/// Zone matching itself is exact and case-sensitive; this only rejects
/// obviously malformed input, it does not canonicalize case.
pub fn validate_zone_name(zone: &str) -> ValidationResult<String> {
    let zone = zone.trim();

    if zone.is_empty() {
        return Err(ValidationError::Required {
            field: "zone".to_string(),
        });
    }

    if zone.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "zone".to_string(),
            max: 100,
        });
    }

    Ok(zone.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a trip duration in days.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_TRIP_DAYS (730)
///
/// The engine independently rejects duration 0 (its hard precondition);
/// the upper bound is a boundary rule only.
pub fn validate_duration(days: u32) -> ValidationResult<()> {
    if days == 0 {
        return Err(ValidationError::MustBePositive {
            field: "duration".to_string(),
        });
    }

    if days > MAX_TRIP_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "duration".to_string(),
            min: 1,
            max: MAX_TRIP_DAYS as i64,
        });
    }

    Ok(())
}

/// Validates a traveler list at the boundary.
///
/// ## Rules
/// - Must be non-empty
/// - Must not exceed MAX_TRAVELERS (20)
/// - Ages must not exceed MAX_TRAVELER_AGE (130)
///
/// Note this is stricter than the engine: the engine prices any age and
/// lets the bracket fallback policy decide what an uncovered age means.
/// The age cap here catches typos (e.g. 300 for 30) before they reach it.
pub fn validate_travelers(travelers: &[Traveler]) -> ValidationResult<()> {
    if travelers.is_empty() {
        return Err(ValidationError::Required {
            field: "travelers".to_string(),
        });
    }

    if travelers.len() > MAX_TRAVELERS {
        return Err(ValidationError::OutOfRange {
            field: "travelers".to_string(),
            min: 1,
            max: MAX_TRAVELERS as i64,
        });
    }

    for traveler in travelers {
        if traveler.age > MAX_TRAVELER_AGE {
            return Err(ValidationError::OutOfRange {
                field: "age".to_string(),
                min: 0,
                max: MAX_TRAVELER_AGE as i64,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Configuration Validator
// =============================================================================

/// Validates a pricing configuration snapshot.
///
/// Called by the engine on every quote and by the config crate when a
/// snapshot is built from an admin document, so a broken catalog fails
/// loudly in both places.
///
/// ## Rules
/// - Plan catalog must be non-empty; base prices must be finite and >= 0
/// - Zone multipliers must be finite and > 0
/// - Bracket multipliers must be finite and > 0; `min <= max`
/// - Tax and commission rates must be finite and >= 0
pub fn validate_config(config: &PricingConfig) -> Result<(), QuoteError> {
    let invalid = |reason: String| QuoteError::InvalidConfiguration { reason };

    if config.plans.is_empty() {
        return Err(invalid("plan catalog is empty".to_string()));
    }

    for plan in &config.plans {
        if !plan.base_price.is_finite() || plan.base_price < 0.0 {
            return Err(invalid(format!(
                "plan '{}' has invalid base price {}",
                plan.name, plan.base_price
            )));
        }
    }

    for zone in &config.zones {
        if !zone.price_multiplier.is_finite() || zone.price_multiplier <= 0.0 {
            return Err(invalid(format!(
                "zone '{}' has non-positive multiplier {}",
                zone.name, zone.price_multiplier
            )));
        }
    }

    for bracket in &config.age_brackets {
        if bracket.min > bracket.max {
            return Err(invalid(format!(
                "age bracket {}-{} has min greater than max",
                bracket.min, bracket.max
            )));
        }
        if !bracket.price_multiplier.is_finite() || bracket.price_multiplier <= 0.0 {
            return Err(invalid(format!(
                "age bracket {}-{} has non-positive multiplier {}",
                bracket.min, bracket.max, bracket.price_multiplier
            )));
        }
    }

    if !config.tax_rate.is_finite() || config.tax_rate < 0.0 {
        return Err(invalid(format!("negative tax rate {}", config.tax_rate)));
    }

    if !config.commission_rate.is_finite() || config.commission_rate < 0.0 {
        return Err(invalid(format!(
            "negative commission rate {}",
            config.commission_rate
        )));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
