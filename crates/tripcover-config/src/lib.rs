//! # tripcover-config: Pricing Configuration Layer for Tripcover
//!
//! Turns pricing documents exported by the admin back office into
//! validated, immutable [`PricingConfig`] snapshots, and holds the active
//! snapshot for concurrent quoting.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Admin back office ──► pricing.json ──► tripcover-config (THIS CRATE)  │
//! │                                              │                          │
//! │            ┌─────────────┬───────────────────┤                          │
//! │            ▼             ▼                   ▼                          │
//! │        document       store              overrides                      │
//! │     parse+validate   atomic swap        TRIPCOVER_* env                 │
//! │            │                                                            │
//! │            ▼                                                            │
//! │     tripcover-core::calculate_quote(&snapshot, &request)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`document`] - Pricing document model, file loading, env overrides
//! - [`store`] - Thread-safe active snapshot with atomic replacement
//! - [`error`] - Configuration error types
//!
//! [`PricingConfig`]: tripcover_core::PricingConfig

pub mod document;
pub mod error;
pub mod store;

pub use document::{load_pricing_file, Overrides, PricingDocument};
pub use error::{ConfigError, ConfigResult};
pub use store::ConfigStore;
