//! # Domain Types
//!
//! Core domain types used throughout Tripcover.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    PlanEntry    │   │    ZoneEntry    │   │   AgeBracket    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  min, max       │       │
//! │  │  name           │   │  name           │   │  (inclusive)    │       │
//! │  │  base_price     │   │  price_mult     │   │  price_mult     │       │
//! │  └─────────────────┘   │  risk_level     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  QuoteRequest   │   │     Quote       │   │  PricingConfig  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  category       │   │  subtotal       │   │  plans          │       │
//! │  │  zone           │   │  tax            │   │  zones          │       │
//! │  │  duration       │   │  commission     │   │  age_brackets   │       │
//! │  │  travelers      │   │  total          │   │  rates/currency │       │
//! │  └─────────────────┘   │  price_per_day  │   │  policies       │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64 Prices?
//! Quotes must reproduce the storefront's arithmetic bit-for-bit, including
//! fractional zone/bracket multipliers (1.4, 1.2, ...) and a fixed
//! per-traveler summation order. Prices therefore stay in f64 end to end;
//! rounding to two decimals happens only at the display boundary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Catalog Entries
// =============================================================================

/// A named insurance tier from the plan catalog.
///
/// Defined by the back office; read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Unique identifier (UUID v4, minted by the admin store).
    pub id: String,

    /// Display name, also the match target for a requested category.
    pub name: String,

    /// Price per traveler per day, before any multiplier.
    pub base_price: f64,
}

/// A geographic pricing region.
///
/// Requested zones are matched against `name` with exact, case-sensitive
/// equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEntry {
    /// Unique identifier (UUID v4, minted by the admin store).
    pub id: String,

    /// Zone name as shown on the storefront selector.
    pub name: String,

    /// Multiplier applied to the plan's base price.
    pub price_multiplier: f64,

    /// Risk classification (1 = low .. 5 = high). Informational to the
    /// engine; pricing flows only through `price_multiplier`.
    pub risk_level: u8,
}

/// An age-based pricing multiplier.
///
/// ## Invariant
/// The configured brackets should partition the age domain without gaps.
/// A traveler falling outside every bracket triggers the fallback policy
/// in [`BracketFallback`], never a silent bracket match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AgeBracket {
    /// Inclusive lower age bound.
    pub min: u32,

    /// Inclusive upper age bound.
    pub max: u32,

    /// Multiplier applied to the base daily price.
    pub price_multiplier: f64,
}

impl AgeBracket {
    /// Checks bracket membership: `min <= age <= max`, inclusive both ends.
    #[inline]
    pub const fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

// =============================================================================
// Quote Request
// =============================================================================

/// A participant in the trip.
///
/// Name/passport/nationality belong to booking records and never reach
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Traveler {
    /// Age in whole years.
    pub age: u32,
}

/// Trip parameters assembled by the caller from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Desired plan category (matched per [`PlanMatchMode`]).
    pub category: String,

    /// Desired zone name (matched exactly).
    pub zone: String,

    /// Trip duration in days. Must be positive.
    pub duration: u32,

    /// Travelers on the trip, in input order. Must be non-empty.
    /// Order matters: it is the canonical summation order for pricing.
    pub travelers: Vec<Traveler>,
}

// =============================================================================
// Quote Result
// =============================================================================

/// A non-fatal finding attached to an otherwise successful quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteWarning {
    /// A traveler's age fell outside every configured bracket and was
    /// priced at the unmultiplied base daily price. This reflects a gap
    /// in the bracket configuration, not a request error.
    #[serde(rename_all = "camelCase")]
    AgeBracketUnmatched { traveler_index: usize, age: u32 },
}

/// The full priced breakdown returned for a trip request.
///
/// ## Field Relationships
/// ```text
/// price_per_day = Σ (base_daily_price × bracket_multiplier)   per traveler
/// subtotal      = price_per_day × duration
/// tax           = subtotal × tax_rate / 100
/// commission    = subtotal × commission_rate / 100
/// total         = subtotal + tax + commission
/// ```
///
/// Note `price_per_day` is the multi-traveler daily aggregate, not a
/// single traveler's rate. The name is historical; the storefront
/// displays it as "per day" for the whole party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Sum of all travelers' daily contributions × duration.
    pub subtotal: f64,

    /// Tax on the subtotal.
    pub tax: f64,

    /// Platform/broker margin on the subtotal.
    pub commission: f64,

    /// Grand total: subtotal + tax + commission.
    pub total: f64,

    /// Daily aggregate across all travelers, before duration.
    pub price_per_day: f64,

    /// Currency code copied from the configuration (ISO 4217).
    pub currency: String,

    /// Non-fatal findings (bracket fallbacks). Empty on a clean quote.
    pub warnings: Vec<QuoteWarning>,
}

impl Quote {
    /// Checks whether the quote was computed without any fallback.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

// =============================================================================
// Pricing Policies
// =============================================================================

/// How a requested category is matched against plan names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PlanMatchMode {
    /// Case-insensitive containment: category "gold" matches plan
    /// "Standard Gold". First catalog-order match wins. This is the
    /// storefront's historical behavior; note the looseness (category
    /// "basic" would match a plan named "Ultra Basic Plus").
    #[default]
    Substring,

    /// Case-insensitive equality. Opt-in for deployments that want to
    /// rule out accidental substring hits.
    Exact,
}

impl PlanMatchMode {
    /// Checks whether `plan_name` matches the requested `category` under
    /// this mode. Both sides are lowercased before comparison.
    pub fn matches(&self, plan_name: &str, category: &str) -> bool {
        let name = plan_name.to_lowercase();
        let category = category.to_lowercase();
        match self {
            PlanMatchMode::Substring => name.contains(&category),
            PlanMatchMode::Exact => name == category,
        }
    }
}

/// Policy for travelers whose age no bracket covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BracketFallback {
    /// Price the traveler at the unmultiplied base daily price
    /// (multiplier 1.0) and attach a [`QuoteWarning::AgeBracketUnmatched`]
    /// to the quote. Default, matching the storefront's behavior.
    #[default]
    BasePrice,

    /// Fail the whole quote with `QuoteError::AgeBracketUnmatched`.
    /// For deployments that treat bracket gaps as hard configuration
    /// errors.
    Reject,
}

// =============================================================================
// Pricing Configuration Snapshot
// =============================================================================

/// A consistent, immutable view of the pricing configuration.
///
/// ## Snapshot Semantics
/// The engine reads this per call and never mutates it. Callers must pass
/// a complete snapshot (not a reference into a live, admin-editable
/// store) so a quote is never computed against a half-updated catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Plan catalog, in back-office order. Order is the tie-break for
    /// category matching; it must be preserved.
    pub plans: Vec<PlanEntry>,

    /// Zone catalog.
    pub zones: Vec<ZoneEntry>,

    /// Age bracket catalog, in back-office order (tie-break on overlap).
    pub age_brackets: Vec<AgeBracket>,

    /// Tax rate as a percentage (19 means 19%). Kept on the 0–100
    /// convention of the back office; the engine divides by 100.
    pub tax_rate: f64,

    /// Commission rate as a percentage, same convention as `tax_rate`.
    pub commission_rate: f64,

    /// Currency code (ISO 4217) copied onto every quote.
    pub currency: String,

    /// Category matching policy.
    #[serde(default)]
    pub plan_match: PlanMatchMode,

    /// Uncovered-age policy.
    #[serde(default)]
    pub bracket_fallback: BracketFallback,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bracket_contains_inclusive_bounds() {
        let bracket = AgeBracket {
            min: 18,
            max: 64,
            price_multiplier: 1.0,
        };
        assert!(bracket.contains(18));
        assert!(bracket.contains(64));
        assert!(bracket.contains(30));
        assert!(!bracket.contains(17));
        assert!(!bracket.contains(65));
    }

    #[test]
    fn test_plan_match_substring_case_insensitive() {
        let mode = PlanMatchMode::Substring;
        assert!(mode.matches("Standard Gold", "gold"));
        assert!(mode.matches("Standard Gold", "GOLD"));
        assert!(mode.matches("Ultra Basic Plus", "basic"));
        assert!(!mode.matches("Standard", "gold"));
    }

    #[test]
    fn test_plan_match_exact() {
        let mode = PlanMatchMode::Exact;
        assert!(mode.matches("Gold", "gold"));
        assert!(!mode.matches("Standard Gold", "gold"));
    }

    #[test]
    fn test_policy_defaults() {
        assert_eq!(PlanMatchMode::default(), PlanMatchMode::Substring);
        assert_eq!(BracketFallback::default(), BracketFallback::BasePrice);
    }

    #[test]
    fn test_config_policies_default_when_absent_from_json() {
        // Older pricing documents predate the policy fields.
        let json = r#"{
            "plans": [],
            "zones": [],
            "ageBrackets": [],
            "taxRate": 19.0,
            "commissionRate": 10.0,
            "currency": "EUR"
        }"#;
        let config: PricingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.plan_match, PlanMatchMode::Substring);
        assert_eq!(config.bracket_fallback, BracketFallback::BasePrice);
    }

    #[test]
    fn test_quote_warning_serialization_shape() {
        let warning = QuoteWarning::AgeBracketUnmatched {
            traveler_index: 2,
            age: 200,
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "age_bracket_unmatched");
        assert_eq!(json["travelerIndex"], 2);
        assert_eq!(json["age"], 200);
    }
}
