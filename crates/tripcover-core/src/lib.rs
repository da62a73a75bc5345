//! # tripcover-core: Pure Pricing Engine for Tripcover
//!
//! This crate is the **heart** of Tripcover. It contains the quote
//! pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tripcover Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront / Back Office (Web)                  │   │
//! │  │    Trip form ──► Quote display        Admin: plans/zones/ages   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tripcover-config                               │   │
//! │  │    Pricing documents ──► validated PricingConfig snapshots      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tripcover-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  engine   │  │   error   │  │ validation│   │   │
//! │  │   │ PlanEntry │  │ calculate │  │QuoteError │  │   rules   │   │   │
//! │  │   │ ZoneEntry │  │  _quote   │  │Validation │  │  checks   │   │   │
//! │  │   │   Quote   │  │           │  │   Error   │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • NO CLOCK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PlanEntry, ZoneEntry, AgeBracket, Quote, ...)
//! - [`engine`] - The quote calculation pipeline
//! - [`error`] - Domain error types
//! - [`validation`] - Request and configuration validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: a quote is a function of its inputs - same
//!    snapshot + same request = bit-identical breakdown
//! 2. **No Globals**: the configuration snapshot is an explicit argument,
//!    never read from a shared store inside the engine
//! 3. **Explicit Errors**: all failures are typed, never strings or panics;
//!    a failed quote never yields a partial price
//! 4. **Warnings Are Data**: bracket fallbacks ride on the quote itself so
//!    callers decide how strict to be
//!
//! ## Example Usage
//!
//! ```rust
//! use tripcover_core::{calculate_quote, PricingConfig, QuoteRequest, Traveler};
//! use tripcover_core::{AgeBracket, PlanEntry, ZoneEntry};
//!
//! let config = PricingConfig {
//!     plans: vec![PlanEntry {
//!         id: "6f9619ff-8b86-4d01-b42d-00c04fc964ff".into(),
//!         name: "Standard".into(),
//!         base_price: 8.0,
//!     }],
//!     zones: vec![ZoneEntry {
//!         id: "3f2504e0-4f89-41d3-9a0c-0305e82c3301".into(),
//!         name: "Europa".into(),
//!         price_multiplier: 1.4,
//!         risk_level: 2,
//!     }],
//!     age_brackets: vec![AgeBracket { min: 18, max: 64, price_multiplier: 1.0 }],
//!     tax_rate: 19.0,
//!     commission_rate: 10.0,
//!     currency: "EUR".into(),
//!     plan_match: Default::default(),
//!     bracket_fallback: Default::default(),
//! };
//!
//! let request = QuoteRequest {
//!     category: "standard".into(),
//!     zone: "Europa".into(),
//!     duration: 10,
//!     travelers: vec![Traveler { age: 30 }],
//! };
//!
//! let quote = calculate_quote(&config, &request).unwrap();
//! assert_eq!(quote.subtotal, 112.0);
//! assert_eq!(quote.tax, 21.28);
//! assert_eq!(quote.total, 144.48);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tripcover_core::Quote` instead of
// `use tripcover_core::types::Quote`

pub use engine::calculate_quote;
pub use error::{QuoteError, QuoteResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum trip duration accepted at the boundary, in days.
///
/// ## Business Reason
/// Two years covers every long-stay product sold today. Longer values are
/// almost always date-picker mistakes, not real trips.
pub const MAX_TRIP_DAYS: u32 = 730;

/// Maximum number of travelers on a single quote.
///
/// ## Business Reason
/// Group policies above this size are handled by the sales team, not the
/// storefront. Also bounds the work a single request can ask for.
pub const MAX_TRAVELERS: usize = 20;

/// Maximum traveler age accepted at the boundary.
///
/// ## Business Reason
/// Catches typos (300 for 30) before the bracket fallback turns them
/// into a silently unmultiplied price. The engine itself prices any age
/// and leaves the policy decision to [`BracketFallback`].
pub const MAX_TRAVELER_AGE: u32 = 130;
