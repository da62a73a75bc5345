//! # Pricing Documents
//!
//! Serde model of the pricing export produced by the admin back office,
//! and its conversion into a validated [`PricingConfig`] snapshot.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Document (JSON)                            │
//! │                                                                         │
//! │  {                                                                      │
//! │    "plans":      [ { "id", "name", "basePrice" }, ... ],               │
//! │    "zones":      [ { "id", "name", "priceMultiplier",                  │
//! │                      "riskLevel" }, ... ],                             │
//! │    "ageRanges":  [ { "min", "max", "priceMultiplier" }, ... ],         │
//! │    "paymentSettings": { "currency", "taxRate", "commissionRate" },     │
//! │    "quotePolicy": { "planMatch", "bracketFallback" }   (optional)      │
//! │  }                                                                      │
//! │                                                                         │
//! │  Catalog arrays keep back-office order. That order is the engine's     │
//! │  tie-break for plan and bracket resolution - never sort them.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use tripcover_core::validation::validate_config;
use tripcover_core::{
    AgeBracket, BracketFallback, PlanEntry, PlanMatchMode, PricingConfig, QuoteError, ZoneEntry,
};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Document Model
// =============================================================================

/// A pricing export from the admin back office.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDocument {
    pub plans: Vec<PlanDocument>,
    pub zones: Vec<ZoneDocument>,
    pub age_ranges: Vec<AgeRangeDocument>,
    pub payment_settings: PaymentSettings,

    /// Quote policy knobs. Absent in older exports; defaults apply.
    #[serde(default)]
    pub quote_policy: QuotePolicy,
}

/// One plan row of the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub id: String,
    pub name: String,
    pub base_price: f64,
}

/// One zone row of the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDocument {
    pub id: String,
    pub name: String,
    pub price_multiplier: f64,

    /// Risk classification (1 = low .. 5 = high). Older exports omit it.
    #[serde(default = "default_risk_level")]
    pub risk_level: u8,
}

/// One age range row of the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRangeDocument {
    pub min: u32,
    pub max: u32,
    pub price_multiplier: f64,
}

/// Payment settings block of the export.
///
/// Rates stay on the back office's 0-100 percentage convention (19 means
/// 19%). Converting to 0-1 fractions here would invite silent 100×
/// pricing errors downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    pub currency: String,
    pub tax_rate: f64,
    pub commission_rate: f64,
}

/// Quote policy block of the export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePolicy {
    #[serde(default)]
    pub plan_match: PlanMatchMode,

    #[serde(default)]
    pub bracket_fallback: BracketFallback,
}

fn default_risk_level() -> u8 {
    1
}

// =============================================================================
// Conversion to Snapshot
// =============================================================================

impl PricingDocument {
    /// Converts the document into a validated [`PricingConfig`] snapshot.
    ///
    /// Catalog ids must be UUIDs (they are primary keys in the admin
    /// store); everything else is checked by the engine's own
    /// configuration validator, so the two layers can never disagree on
    /// what a usable catalog is.
    pub fn into_config(self) -> ConfigResult<PricingConfig> {
        for plan in &self.plans {
            validate_catalog_id("plan", &plan.name, &plan.id)?;
        }
        for zone in &self.zones {
            validate_catalog_id("zone", &zone.name, &zone.id)?;
        }

        let config = PricingConfig {
            plans: self
                .plans
                .into_iter()
                .map(|plan| PlanEntry {
                    id: plan.id,
                    name: plan.name,
                    base_price: plan.base_price,
                })
                .collect(),
            zones: self
                .zones
                .into_iter()
                .map(|zone| ZoneEntry {
                    id: zone.id,
                    name: zone.name,
                    price_multiplier: zone.price_multiplier,
                    risk_level: zone.risk_level,
                })
                .collect(),
            age_brackets: self
                .age_ranges
                .into_iter()
                .map(|range| AgeBracket {
                    min: range.min,
                    max: range.max,
                    price_multiplier: range.price_multiplier,
                })
                .collect(),
            tax_rate: self.payment_settings.tax_rate,
            commission_rate: self.payment_settings.commission_rate,
            currency: self.payment_settings.currency,
            plan_match: self.quote_policy.plan_match,
            bracket_fallback: self.quote_policy.bracket_fallback,
        };

        match validate_config(&config) {
            Ok(()) => Ok(config),
            Err(QuoteError::InvalidConfiguration { reason }) => {
                Err(ConfigError::Invalid { reason })
            }
            Err(other) => Err(ConfigError::Invalid {
                reason: other.to_string(),
            }),
        }
    }
}

fn validate_catalog_id(entity: &str, name: &str, id: &str) -> ConfigResult<()> {
    uuid::Uuid::parse_str(id).map_err(|_| ConfigError::Invalid {
        reason: format!("{entity} '{name}' has non-UUID id '{id}'"),
    })?;
    Ok(())
}

// =============================================================================
// File Loading
// =============================================================================

/// Loads and validates a pricing document from a JSON file.
pub fn load_pricing_file(path: impl AsRef<Path>) -> ConfigResult<PricingConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let document: PricingDocument = serde_json::from_str(&raw)?;
    let config = document.into_config()?;

    debug!(
        path = %path.display(),
        plans = config.plans.len(),
        zones = config.zones.len(),
        age_brackets = config.age_brackets.len(),
        "loaded pricing configuration"
    );

    Ok(config)
}

// =============================================================================
// Environment Overrides
// =============================================================================

/// Overrides applied on top of a parsed document.
///
/// ## Environment Variables
/// - `TRIPCOVER_TAX_RATE`: override tax rate (percentage, e.g. "19")
/// - `TRIPCOVER_COMMISSION_RATE`: override commission rate (percentage)
/// - `TRIPCOVER_CURRENCY`: override currency code (e.g. "USD")
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tax_rate: Option<f64>,
    pub commission_rate: Option<f64>,
    pub currency: Option<String>,
}

impl Overrides {
    /// Reads overrides from `TRIPCOVER_*` environment variables.
    /// Unparseable numeric values are skipped with a warning.
    pub fn from_env() -> Self {
        Overrides {
            tax_rate: env_rate("TRIPCOVER_TAX_RATE"),
            commission_rate: env_rate("TRIPCOVER_COMMISSION_RATE"),
            currency: std::env::var("TRIPCOVER_CURRENCY").ok(),
        }
    }

    /// Applies the overrides to a configuration snapshot.
    pub fn apply(&self, config: &mut PricingConfig) {
        if let Some(tax_rate) = self.tax_rate {
            debug!(tax_rate, "overriding tax rate");
            config.tax_rate = tax_rate;
        }
        if let Some(commission_rate) = self.commission_rate {
            debug!(commission_rate, "overriding commission rate");
            config.commission_rate = commission_rate;
        }
        if let Some(currency) = &self.currency {
            debug!(%currency, "overriding currency");
            config.currency = currency.clone();
        }
    }
}

fn env_rate(var: &str) -> Option<f64> {
    let raw = std::env::var(var).ok()?;
    match raw.parse::<f64>() {
        Ok(rate) => Some(rate),
        Err(_) => {
            tracing::warn!(var, value = %raw, "ignoring unparseable rate override");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_DOCUMENT: &str = r#"{
        "plans": [
            { "id": "6f9619ff-8b86-4d01-b42d-00c04fc964ff", "name": "Standard", "basePrice": 8.0 },
            { "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7", "name": "Standard Gold", "basePrice": 12.0 }
        ],
        "zones": [
            { "id": "3f2504e0-4f89-41d3-9a0c-0305e82c3301", "name": "Europa", "priceMultiplier": 1.4, "riskLevel": 2 }
        ],
        "ageRanges": [
            { "min": 0, "max": 11, "priceMultiplier": 1.2 },
            { "min": 12, "max": 64, "priceMultiplier": 1.0 },
            { "min": 65, "max": 120, "priceMultiplier": 1.5 }
        ],
        "paymentSettings": { "currency": "EUR", "taxRate": 19.0, "commissionRate": 10.0 }
    }"#;

    #[test]
    fn test_document_converts_to_snapshot() {
        let document: PricingDocument = serde_json::from_str(VALID_DOCUMENT).unwrap();
        let config = document.into_config().unwrap();

        assert_eq!(config.plans.len(), 2);
        assert_eq!(config.plans[0].name, "Standard");
        assert_eq!(config.zones[0].price_multiplier, 1.4);
        assert_eq!(config.age_brackets.len(), 3);
        assert_eq!(config.tax_rate, 19.0);
        assert_eq!(config.commission_rate, 10.0);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.plan_match, PlanMatchMode::Substring);
        assert_eq!(config.bracket_fallback, BracketFallback::BasePrice);
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let document: PricingDocument = serde_json::from_str(VALID_DOCUMENT).unwrap();
        let config = document.into_config().unwrap();

        // Order is the engine's tie-break; conversion must not sort.
        let names: Vec<&str> = config.plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Standard", "Standard Gold"]);
    }

    #[test]
    fn test_quote_policy_block_is_honored() {
        let mut value: serde_json::Value = serde_json::from_str(VALID_DOCUMENT).unwrap();
        value["quotePolicy"] = serde_json::json!({
            "planMatch": "exact",
            "bracketFallback": "reject"
        });

        let document: PricingDocument = serde_json::from_value(value).unwrap();
        let config = document.into_config().unwrap();
        assert_eq!(config.plan_match, PlanMatchMode::Exact);
        assert_eq!(config.bracket_fallback, BracketFallback::Reject);
    }

    #[test]
    fn test_missing_risk_level_defaults() {
        let mut value: serde_json::Value = serde_json::from_str(VALID_DOCUMENT).unwrap();
        value["zones"][0].as_object_mut().unwrap().remove("riskLevel");

        let document: PricingDocument = serde_json::from_value(value).unwrap();
        let config = document.into_config().unwrap();
        assert_eq!(config.zones[0].risk_level, 1);
    }

    #[test]
    fn test_non_uuid_id_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(VALID_DOCUMENT).unwrap();
        value["plans"][0]["id"] = serde_json::json!("not-a-uuid");

        let document: PricingDocument = serde_json::from_value(value).unwrap();
        let err = document.into_config().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_empty_plan_catalog_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(VALID_DOCUMENT).unwrap();
        value["plans"] = serde_json::json!([]);

        let document: PricingDocument = serde_json::from_value(value).unwrap();
        let err = document.into_config().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_negative_multiplier_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(VALID_DOCUMENT).unwrap();
        value["zones"][0]["priceMultiplier"] = serde_json::json!(-1.4);

        let document: PricingDocument = serde_json::from_value(value).unwrap();
        assert!(document.into_config().is_err());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error_not_a_panic() {
        let err = serde_json::from_str::<PricingDocument>("{ not json")
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_pricing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID_DOCUMENT.as_bytes()).unwrap();

        let config = load_pricing_file(file.path()).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.plans.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_pricing_file("/nonexistent/pricing.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_overrides_apply() {
        let document: PricingDocument = serde_json::from_str(VALID_DOCUMENT).unwrap();
        let mut config = document.into_config().unwrap();

        let overrides = Overrides {
            tax_rate: Some(21.0),
            commission_rate: None,
            currency: Some("USD".to_string()),
        };
        overrides.apply(&mut config);

        assert_eq!(config.tax_rate, 21.0);
        assert_eq!(config.commission_rate, 10.0);
        assert_eq!(config.currency, "USD");
    }
}
