//! # Configuration Store
//!
//! Thread-safe holder of the active pricing snapshot.
//!
//! ## Snapshot Swapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ConfigStore Operations                              │
//! │                                                                         │
//! │  Quote path                       Admin path                            │
//! │  ──────────                       ──────────                            │
//! │                                                                         │
//! │  snapshot() ──► Arc<PricingConfig>   replace(new) ──► validate          │
//! │       │         (owned, immutable)        │           then swap         │
//! │       ▼                                   ▼                             │
//! │  calculate_quote(&snapshot, ..)      old snapshot lives on in           │
//! │                                      any in-flight quote                │
//! │                                                                         │
//! │  A quote therefore never observes a half-applied admin edit: it         │
//! │  holds the whole catalog it started with until it finishes.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `RwLock` because reads (quotes) vastly outnumber writes (admin saves),
//! and reads only clone an `Arc`.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tracing::info;

use tripcover_core::validation::validate_config;
use tripcover_core::{PricingConfig, QuoteError};

use crate::error::{ConfigError, ConfigResult};

struct ActiveSnapshot {
    config: Arc<PricingConfig>,
    applied_at: DateTime<Utc>,
}

/// Holds the active pricing snapshot and swaps it atomically.
pub struct ConfigStore {
    active: RwLock<ActiveSnapshot>,
}

impl ConfigStore {
    /// Creates a store with an initial, validated snapshot.
    pub fn new(config: PricingConfig) -> ConfigResult<Self> {
        check(&config)?;
        Ok(ConfigStore {
            active: RwLock::new(ActiveSnapshot {
                config: Arc::new(config),
                applied_at: Utc::now(),
            }),
        })
    }

    /// Returns the current snapshot as an owned handle.
    ///
    /// The returned `Arc` keeps the whole catalog alive for as long as
    /// the caller needs it, regardless of later `replace` calls.
    pub fn snapshot(&self) -> Arc<PricingConfig> {
        let active = self.active.read().expect("config store lock poisoned");
        Arc::clone(&active.config)
    }

    /// When the active snapshot was applied.
    pub fn applied_at(&self) -> DateTime<Utc> {
        let active = self.active.read().expect("config store lock poisoned");
        active.applied_at
    }

    /// Validates and installs a new snapshot.
    ///
    /// On validation failure the previous snapshot stays active, so a
    /// bad admin save can never take quoting down.
    pub fn replace(&self, config: PricingConfig) -> ConfigResult<()> {
        check(&config)?;

        let mut active = self.active.write().expect("config store lock poisoned");
        active.config = Arc::new(config);
        active.applied_at = Utc::now();

        info!(
            plans = active.config.plans.len(),
            zones = active.config.zones.len(),
            age_brackets = active.config.age_brackets.len(),
            "pricing configuration replaced"
        );
        Ok(())
    }
}

fn check(config: &PricingConfig) -> ConfigResult<()> {
    match validate_config(config) {
        Ok(()) => Ok(()),
        Err(QuoteError::InvalidConfiguration { reason }) => Err(ConfigError::Invalid { reason }),
        Err(other) => Err(ConfigError::Invalid {
            reason: other.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
