//! # Quote Engine
//!
//! The pure pricing pipeline at the heart of Tripcover.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     calculate_quote Pipeline                            │
//! │                                                                         │
//! │  QuoteRequest + PricingConfig                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Preconditions: travelers non-empty, duration > 0, config sane          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Resolve plan (match mode, first wins) ──► PlanNotFound                │
//! │  Resolve zone (exact name)             ──► ZoneNotFound                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base_daily_price = base_price × zone multiplier                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Per traveler, in request order:                                        │
//! │    travelers_price += base_daily_price × bracket multiplier             │
//! │    (no bracket → fallback policy: ×1.0 + warning, or reject)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal   = travelers_price × duration                                │
//! │  tax        = subtotal × tax_rate / 100                                 │
//! │  commission = subtotal × commission_rate / 100                          │
//! │  total      = subtotal + tax + commission                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Quote { subtotal, tax, commission, total, price_per_day, ... }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! Same inputs give bit-identical outputs: no clock, no globals, no I/O,
//! no mutation of arguments. The per-traveler accumulation order above is
//! the canonical summation order; reordering would perturb the f64 sum.

use crate::error::{QuoteError, QuoteResult};
use crate::types::{
    AgeBracket, BracketFallback, PlanEntry, PricingConfig, Quote, QuoteRequest, QuoteWarning,
    ZoneEntry,
};
use crate::validation::validate_config;

// =============================================================================
// Quote Calculation
// =============================================================================

/// Computes a priced breakdown for a trip request against a configuration
/// snapshot.
///
/// ## Errors
/// - [`QuoteError::EmptyTravelerList`] - no travelers supplied
/// - [`QuoteError::InvalidDuration`] - duration of zero days
/// - [`QuoteError::InvalidConfiguration`] - unusable catalog (empty plan
///   list, non-positive multipliers, negative rates)
/// - [`QuoteError::PlanNotFound`] / [`QuoteError::ZoneNotFound`] - the
///   requested category/zone resolves to nothing
/// - [`QuoteError::AgeBracketUnmatched`] - only under
///   [`BracketFallback::Reject`]; the default policy attaches a warning
///   to the quote instead
///
/// ## Example
/// ```rust
/// use tripcover_core::{calculate_quote, PricingConfig, QuoteRequest, Traveler};
/// use tripcover_core::{AgeBracket, PlanEntry, ZoneEntry};
///
/// let config = PricingConfig {
///     plans: vec![PlanEntry {
///         id: "6f9619ff-8b86-4d01-b42d-00c04fc964ff".into(),
///         name: "Standard".into(),
///         base_price: 8.0,
///     }],
///     zones: vec![ZoneEntry {
///         id: "3f2504e0-4f89-41d3-9a0c-0305e82c3301".into(),
///         name: "Europa".into(),
///         price_multiplier: 1.4,
///         risk_level: 2,
///     }],
///     age_brackets: vec![AgeBracket { min: 0, max: 120, price_multiplier: 1.0 }],
///     tax_rate: 19.0,
///     commission_rate: 10.0,
///     currency: "EUR".into(),
///     plan_match: Default::default(),
///     bracket_fallback: Default::default(),
/// };
/// let request = QuoteRequest {
///     category: "standard".into(),
///     zone: "Europa".into(),
///     duration: 10,
///     travelers: vec![Traveler { age: 30 }],
/// };
///
/// let quote = calculate_quote(&config, &request).unwrap();
/// assert_eq!(quote.subtotal, 112.0);
/// assert_eq!(quote.total, 144.48);
/// ```
pub fn calculate_quote(config: &PricingConfig, request: &QuoteRequest) -> QuoteResult<Quote> {
    // Hard preconditions before any catalog work.
    if request.travelers.is_empty() {
        return Err(QuoteError::EmptyTravelerList);
    }
    if request.duration == 0 {
        return Err(QuoteError::InvalidDuration {
            duration: request.duration,
        });
    }
    validate_config(config)?;

    let plan = resolve_plan(config, &request.category).ok_or_else(|| QuoteError::PlanNotFound {
        category: request.category.clone(),
    })?;
    let zone = resolve_zone(config, &request.zone).ok_or_else(|| QuoteError::ZoneNotFound {
        zone: request.zone.clone(),
    })?;

    let base_daily_price = plan.base_price * zone.price_multiplier;

    // Canonical summation order: traveler list order. Do not reorder.
    let mut travelers_price = 0.0_f64;
    let mut warnings = Vec::new();
    for (traveler_index, traveler) in request.travelers.iter().enumerate() {
        let multiplier = match resolve_bracket(config, traveler.age) {
            Some(bracket) => bracket.price_multiplier,
            None => match config.bracket_fallback {
                BracketFallback::BasePrice => {
                    warnings.push(QuoteWarning::AgeBracketUnmatched {
                        traveler_index,
                        age: traveler.age,
                    });
                    1.0
                }
                BracketFallback::Reject => {
                    return Err(QuoteError::AgeBracketUnmatched {
                        traveler_index,
                        age: traveler.age,
                    });
                }
            },
        };
        travelers_price += base_daily_price * multiplier;
    }

    let subtotal = travelers_price * f64::from(request.duration);
    let tax = subtotal * config.tax_rate / 100.0;
    let commission = subtotal * config.commission_rate / 100.0;
    let total = subtotal + tax + commission;

    Ok(Quote {
        subtotal,
        tax,
        commission,
        total,
        price_per_day: travelers_price,
        currency: config.currency.clone(),
        warnings,
    })
}

// =============================================================================
// Catalog Resolution
// =============================================================================

/// Resolves the requested category to a plan.
///
/// First catalog-order match wins; catalog order is the only tie-break,
/// so it must be preserved from the back office.
fn resolve_plan<'a>(config: &'a PricingConfig, category: &str) -> Option<&'a PlanEntry> {
    config
        .plans
        .iter()
        .find(|plan| config.plan_match.matches(&plan.name, category))
}

/// Resolves the requested zone by exact, case-sensitive name equality.
fn resolve_zone<'a>(config: &'a PricingConfig, zone: &str) -> Option<&'a ZoneEntry> {
    config.zones.iter().find(|entry| entry.name == zone)
}

/// Resolves the first bracket (catalog order) containing the age.
///
/// Overlapping brackets are a configuration error; first-wins keeps the
/// outcome deterministic rather than guessing which one was intended.
fn resolve_bracket(config: &PricingConfig, age: u32) -> Option<&AgeBracket> {
    config
        .age_brackets
        .iter()
        .find(|bracket| bracket.contains(age))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlanMatchMode, Traveler};

    // Reference scenario: Standard plan at 8.00/day, Europa ×1.4,
    // adult bracket ×1.0, 10 days, 19% tax, 10% commission.

    fn plan(id: &str, name: &str, base_price: f64) -> PlanEntry {
        PlanEntry {
            id: id.to_string(),
            name: name.to_string(),
            base_price,
        }
    }

    fn zone(id: &str, name: &str, price_multiplier: f64) -> ZoneEntry {
        ZoneEntry {
            id: id.to_string(),
            name: name.to_string(),
            price_multiplier,
            risk_level: 2,
        }
    }

    fn bracket(min: u32, max: u32, price_multiplier: f64) -> AgeBracket {
        AgeBracket {
            min,
            max,
            price_multiplier,
        }
    }

    fn test_config() -> PricingConfig {
        PricingConfig {
            plans: vec![plan(
                "6f9619ff-8b86-4d01-b42d-00c04fc964ff",
                "Standard",
                8.0,
            )],
            zones: vec![zone(
                "3f2504e0-4f89-41d3-9a0c-0305e82c3301",
                "Europa",
                1.4,
            )],
            age_brackets: vec![
                bracket(0, 11, 1.2),
                bracket(12, 17, 1.1),
                bracket(18, 64, 1.0),
                bracket(65, 120, 1.5),
            ],
            tax_rate: 19.0,
            commission_rate: 10.0,
            currency: "EUR".to_string(),
            plan_match: Default::default(),
            bracket_fallback: Default::default(),
        }
    }

    fn request(category: &str, zone: &str, duration: u32, ages: &[u32]) -> QuoteRequest {
        QuoteRequest {
            category: category.to_string(),
            zone: zone.to_string(),
            duration,
            travelers: ages.iter().map(|&age| Traveler { age }).collect(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_single_adult_ten_days() {
        let quote = calculate_quote(&test_config(), &request("standard", "Europa", 10, &[30]))
            .unwrap();

        // base daily price: 8.00 × 1.4 = 11.20, adult multiplier ×1.0
        assert_eq!(quote.price_per_day, 11.2);
        assert_eq!(quote.subtotal, 112.0);
        assert_eq!(quote.tax, 21.28);
        assert_eq!(quote.commission, 11.2);
        assert_eq!(quote.total, 144.48);
        assert_eq!(quote.currency, "EUR");
        assert!(quote.is_clean());
    }

    #[test]
    fn test_child_and_senior_aggregate() {
        let quote = calculate_quote(&test_config(), &request("standard", "Europa", 10, &[10, 70]))
            .unwrap();

        // 11.2 × 1.2 + 11.2 × 1.5 = 13.44 + 16.80 = 30.24
        assert_close(quote.price_per_day, 30.24);
        assert_eq!(quote.subtotal, 302.4);
        assert!(quote.is_clean());
    }

    #[test]
    fn test_unknown_zone_is_an_error() {
        let err = calculate_quote(&test_config(), &request("standard", "Atlantida", 10, &[30]))
            .unwrap_err();
        assert!(matches!(err, QuoteError::ZoneNotFound { zone } if zone == "Atlantida"));
    }

    #[test]
    fn test_zone_match_is_case_sensitive() {
        let err = calculate_quote(&test_config(), &request("standard", "europa", 10, &[30]))
            .unwrap_err();
        assert!(matches!(err, QuoteError::ZoneNotFound { .. }));
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let err = calculate_quote(&test_config(), &request("platinum", "Europa", 10, &[30]))
            .unwrap_err();
        assert!(matches!(err, QuoteError::PlanNotFound { category } if category == "platinum"));
    }

    #[test]
    fn test_category_substring_match() {
        let mut config = test_config();
        config.plans = vec![
            plan("9a1b2c3d-0000-4000-8000-000000000001", "Standard", 8.0),
            plan("9a1b2c3d-0000-4000-8000-000000000002", "Standard Gold", 12.0),
        ];

        let quote =
            calculate_quote(&config, &request("gold", "Europa", 1, &[30])).unwrap();
        // "gold" hits "Standard Gold" via case-insensitive containment.
        assert_close(quote.price_per_day, 12.0 * 1.4);
    }

    #[test]
    fn test_category_first_match_wins_in_catalog_order() {
        let mut config = test_config();
        config.plans = vec![
            plan("9a1b2c3d-0000-4000-8000-000000000001", "Gold Basic", 10.0),
            plan("9a1b2c3d-0000-4000-8000-000000000002", "Gold Premium", 20.0),
        ];

        let quote = calculate_quote(&config, &request("gold", "Europa", 1, &[30])).unwrap();
        assert_close(quote.price_per_day, 10.0 * 1.4);
    }

    #[test]
    fn test_exact_match_mode_rejects_substring_hit() {
        let mut config = test_config();
        config.plan_match = PlanMatchMode::Exact;
        config.plans = vec![plan(
            "9a1b2c3d-0000-4000-8000-000000000001",
            "Standard Gold",
            12.0,
        )];

        let err = calculate_quote(&config, &request("gold", "Europa", 1, &[30])).unwrap_err();
        assert!(matches!(err, QuoteError::PlanNotFound { .. }));

        // Full name still matches, case-insensitively.
        let quote =
            calculate_quote(&config, &request("standard gold", "Europa", 1, &[30])).unwrap();
        assert_close(quote.price_per_day, 12.0 * 1.4);
    }

    #[test]
    fn test_empty_traveler_list_is_an_error() {
        let err = calculate_quote(&test_config(), &request("standard", "Europa", 10, &[]))
            .unwrap_err();
        assert!(matches!(err, QuoteError::EmptyTravelerList));
    }

    #[test]
    fn test_zero_duration_is_an_error() {
        let err = calculate_quote(&test_config(), &request("standard", "Europa", 0, &[30]))
            .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidDuration { duration: 0 }));
    }

    #[test]
    fn test_broken_catalog_is_an_error_not_a_price() {
        let mut config = test_config();
        config.plans.clear();
        let err = calculate_quote(&config, &request("standard", "Europa", 10, &[30]))
            .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_uncovered_age_falls_back_with_warning() {
        let quote = calculate_quote(&test_config(), &request("standard", "Europa", 10, &[200]))
            .unwrap();

        // Priced at the unmultiplied base daily price, flagged, not failed.
        assert_eq!(quote.price_per_day, 11.2);
        assert_eq!(quote.subtotal, 112.0);
        assert_eq!(
            quote.warnings,
            vec![QuoteWarning::AgeBracketUnmatched {
                traveler_index: 0,
                age: 200
            }]
        );
    }

    #[test]
    fn test_uncovered_age_rejected_under_strict_policy() {
        let mut config = test_config();
        config.bracket_fallback = BracketFallback::Reject;

        let err = calculate_quote(&config, &request("standard", "Europa", 10, &[30, 200]))
            .unwrap_err();
        assert!(matches!(
            err,
            QuoteError::AgeBracketUnmatched {
                traveler_index: 1,
                age: 200
            }
        ));
    }

    #[test]
    fn test_bracket_boundary_ages_are_inclusive() {
        let config = test_config();

        // Age 18 and 64 both land in the 18-64 ×1.0 bracket.
        for age in [18, 64] {
            let quote =
                calculate_quote(&config, &request("standard", "Europa", 1, &[age])).unwrap();
            assert_eq!(quote.price_per_day, 11.2);
        }

        // Age 65 tips into the 65-120 ×1.5 bracket.
        let quote = calculate_quote(&config, &request("standard", "Europa", 1, &[65])).unwrap();
        assert_close(quote.price_per_day, 11.2 * 1.5);
    }

    #[test]
    fn test_overlapping_brackets_first_wins() {
        let mut config = test_config();
        config.age_brackets = vec![bracket(0, 120, 1.0), bracket(18, 64, 2.0)];

        let quote = calculate_quote(&config, &request("standard", "Europa", 1, &[30])).unwrap();
        assert_eq!(quote.price_per_day, 11.2);
    }

    #[test]
    fn test_determinism_bit_for_bit() {
        let config = test_config();
        let req = request("standard", "Europa", 7, &[10, 30, 70]);

        let a = calculate_quote(&config, &req).unwrap();
        let b = calculate_quote(&config, &req).unwrap();

        assert_eq!(a.subtotal.to_bits(), b.subtotal.to_bits());
        assert_eq!(a.tax.to_bits(), b.tax.to_bits());
        assert_eq!(a.commission.to_bits(), b.commission.to_bits());
        assert_eq!(a.total.to_bits(), b.total.to_bits());
        assert_eq!(a.price_per_day.to_bits(), b.price_per_day.to_bits());
    }

    #[test]
    fn test_total_is_exact_sum_of_parts() {
        let quote = calculate_quote(&test_config(), &request("standard", "Europa", 13, &[10, 70]))
            .unwrap();
        assert_eq!(quote.total, quote.subtotal + quote.tax + quote.commission);
    }

    #[test]
    fn test_total_grows_with_duration() {
        let config = test_config();
        let mut previous = 0.0;
        for days in 1..=14 {
            let quote =
                calculate_quote(&config, &request("standard", "Europa", days, &[30])).unwrap();
            assert!(quote.total > previous);
            previous = quote.total;
        }
    }

    #[test]
    fn test_subtotal_never_shrinks_when_adding_a_traveler() {
        let config = test_config();
        let one = calculate_quote(&config, &request("standard", "Europa", 10, &[30])).unwrap();
        let two = calculate_quote(&config, &request("standard", "Europa", 10, &[30, 10]))
            .unwrap();
        assert!(two.subtotal >= one.subtotal);
    }

    #[test]
    fn test_doubling_zone_multiplier_doubles_every_amount() {
        let config = test_config();
        let mut doubled = test_config();
        doubled.zones[0].price_multiplier = 2.0 * config.zones[0].price_multiplier;

        let req = request("standard", "Europa", 10, &[10, 30, 70]);
        let base = calculate_quote(&config, &req).unwrap();
        let scaled = calculate_quote(&doubled, &req).unwrap();

        // Scaling by a power of two is exact in f64, so equality is exact.
        assert_eq!(scaled.price_per_day, 2.0 * base.price_per_day);
        assert_eq!(scaled.subtotal, 2.0 * base.subtotal);
        assert_eq!(scaled.tax, 2.0 * base.tax);
        assert_eq!(scaled.commission, 2.0 * base.commission);
        assert_eq!(scaled.total, 2.0 * base.total);
    }

    #[test]
    fn test_zero_rates_yield_zero_tax_and_commission() {
        let mut config = test_config();
        config.tax_rate = 0.0;
        config.commission_rate = 0.0;

        let quote =
            calculate_quote(&config, &request("standard", "Europa", 10, &[30])).unwrap();
        assert_eq!(quote.tax, 0.0);
        assert_eq!(quote.commission, 0.0);
        assert_eq!(quote.total, quote.subtotal);
    }

    #[test]
    fn test_request_and_config_are_not_mutated() {
        let config = test_config();
        let req = request("standard", "Europa", 10, &[30]);
        let config_before = config.clone();
        let req_before = req.clone();

        calculate_quote(&config, &req).unwrap();

        assert_eq!(config, config_before);
        assert_eq!(req, req_before);
    }
}
