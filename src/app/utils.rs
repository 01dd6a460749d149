use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use rust_decimal::Decimal;

static SYMBOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9.\-]{0,9}$").expect("Invalid symbol pattern"));

/// Ticker shape check applied by the form before a lot is submitted.
pub fn is_valid_symbol(symbol: &str) -> bool {
    SYMBOL_PATTERN.is_match(symbol)
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_non_negative(field: &str, field_name: &str) -> Result<Decimal> {
    let value = parse_decimal(field, field_name)?;
    if value.is_sign_negative() {
        return Err(anyhow::anyhow!("{} cannot be negative", field_name));
    }
    Ok(value)
}

/// Currency-style rendering for absent-capable values.
pub fn format_amount(value: &Option<Decimal>) -> String {
    match value {
        Some(value) => format!("{:.2}", value),
        None => String::from("N/A"),
    }
}

/// Fraction-to-percent rendering for absent-capable ratios.
pub fn format_percent(value: &Option<Decimal>) -> String {
    match value {
        Some(value) => format!("{:.2}%", value * Decimal::ONE_HUNDRED),
        None => String::from("N/A"),
    }
}
