use rust_decimal::Decimal;

use crate::models::{HoldingEntry, MarketSnapshot};

/// Derives the full metric set for one purchase lot.
///
/// Cost is always computable from the user's input alone. Every other
/// derived field stays absent when the market data it depends on is missing;
/// absence is never coerced to zero. Ratios over cost are left absent when
/// cost is zero, so a zero-share or free lot never divides by zero.
pub fn compute_entry(
    symbol: &str,
    shares: Decimal,
    purchase_price: Decimal,
    market: &MarketSnapshot,
) -> HoldingEntry {
    let current_price = *market.last_price();

    let cost = shares * purchase_price;
    let market_value = current_price.map(|price| shares * price);
    let dollar_gain = market_value.map(|value| value - cost);
    let growth = dollar_gain.and_then(|gain| ratio(gain, cost));

    let dividend_yield = market.dividend_yield().unwrap_or(Decimal::ZERO);
    let dividend_rate = market.dividend_rate().unwrap_or(Decimal::ZERO);
    let dividend_income = market_value
        .map(|value| value * dividend_yield)
        .unwrap_or(Decimal::ZERO);

    let total_return = dollar_gain.map(|gain| gain + dividend_income);
    let total_return_percent = total_return.and_then(|ret| ratio(ret, cost));

    let industry = market
        .industry()
        .clone()
        .unwrap_or_else(|| String::from("Unknown"));

    HoldingEntry::new(
        symbol.to_string(),
        shares,
        purchase_price,
        current_price,
        cost,
        market_value,
        dollar_gain,
        growth,
        dividend_rate,
        dividend_yield,
        dividend_income,
        industry,
        total_return,
        total_return_percent,
    )
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        None
    } else {
        Some(numerator / denominator)
    }
}
