//! # quote-cli
//!
//! Operator front end for the Tripcover pricing engine.
//!
//! ## Usage
//! ```text
//! quote-cli --config pricing.json \
//!           --plan gold --zone Europa --days 10 --ages 30,70
//! ```
//!
//! ## Responsibility Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote-cli (this binary)          tripcover-core / tripcover-config    │
//! │  ─────────────────────            ──────────────────────────────────    │
//! │  • flag parsing                   • document parsing + validation       │
//! │  • boundary validation            • snapshot semantics                  │
//! │  • warning → log translation      • all quote math                      │
//! │  • currency formatting            • error taxonomy                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed quote exits non-zero with the engine's own message; a partial
//! or zero price is never printed as if it were a valid quote.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tripcover_config::{load_pricing_file, Overrides};
use tripcover_core::validation::{
    validate_category, validate_duration, validate_travelers, validate_zone_name,
};
use tripcover_core::{
    calculate_quote, BracketFallback, PlanMatchMode, Quote, QuoteRequest, QuoteWarning, Traveler,
    ValidationError,
};

/// Price a trip against a pricing document from the back office.
#[derive(Debug, Parser)]
#[command(name = "quote-cli", version, about)]
struct Args {
    /// Path to the pricing document (JSON export from the back office)
    #[arg(long)]
    config: PathBuf,

    /// Requested plan category (e.g. "gold")
    #[arg(long)]
    plan: String,

    /// Destination zone name, matched exactly (e.g. "Europa")
    #[arg(long)]
    zone: String,

    /// Trip duration in days
    #[arg(long)]
    days: u32,

    /// Comma-separated traveler ages (e.g. "30,70")
    #[arg(long)]
    ages: String,

    /// Require the category to equal a plan name instead of the default
    /// substring match
    #[arg(long)]
    exact_match: bool,

    /// Fail the quote when a traveler's age is covered by no bracket,
    /// instead of pricing at the unmultiplied base price
    #[arg(long)]
    strict_brackets: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = load_pricing_file(&args.config)
        .with_context(|| format!("loading pricing document {}", args.config.display()))?;
    Overrides::from_env().apply(&mut config);

    if args.exact_match {
        config.plan_match = PlanMatchMode::Exact;
    }
    if args.strict_brackets {
        config.bracket_fallback = BracketFallback::Reject;
    }

    let travelers = parse_ages(&args.ages)?;

    // Boundary validation before the engine runs; the engine re-checks
    // its own hard preconditions.
    let category = validate_category(&args.plan)?;
    let zone = validate_zone_name(&args.zone)?;
    validate_duration(args.days)?;
    validate_travelers(&travelers)?;

    let request = QuoteRequest {
        category,
        zone,
        duration: args.days,
        travelers,
    };

    let quote = calculate_quote(&config, &request)?;

    for warning in &quote.warnings {
        match warning {
            QuoteWarning::AgeBracketUnmatched {
                traveler_index,
                age,
            } => warn!(
                traveler_index,
                age, "no age bracket covers this traveler; priced at base daily rate"
            ),
        }
    }

    print!("{}", render_quote(&quote, config.tax_rate, config.commission_rate));
    Ok(())
}

/// Parses a comma-separated age list ("30,70") into travelers.
fn parse_ages(raw: &str) -> Result<Vec<Traveler>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "ages".to_string(),
        });
    }

    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map(|age| Traveler { age })
                .map_err(|_| ValidationError::InvalidFormat {
                    field: "ages".to_string(),
                    reason: format!("'{}' is not a valid age", part.trim()),
                })
        })
        .collect()
}

/// Renders the priced breakdown for the terminal.
///
/// Amounts are rounded to two decimals for display only; the engine's
/// full-precision values are what a booking record would persist.
fn render_quote(quote: &Quote, tax_rate: f64, commission_rate: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!("Quote ({})\n", quote.currency));
    out.push_str(&format!(
        "  Price per day     {}\n",
        format_amount(quote.price_per_day)
    ));
    out.push_str(&format!(
        "  Subtotal          {}\n",
        format_amount(quote.subtotal)
    ));
    out.push_str(&format!(
        "  Tax ({}%)         {}\n",
        tax_rate,
        format_amount(quote.tax)
    ));
    out.push_str(&format!(
        "  Commission ({}%)  {}\n",
        commission_rate,
        format_amount(quote.commission)
    ));
    out.push_str(&format!(
        "  Total             {}\n",
        format_amount(quote.total)
    ));
    out
}

/// Formats an amount with two decimal places.
fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
