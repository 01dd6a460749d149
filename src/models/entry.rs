use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One row of the holdings table: the user's purchase lot plus the metrics
/// derived from it. `None` marks a value that could not be computed because
/// the market data it depends on was unavailable, which is distinct from
/// zero.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct HoldingEntry {
    symbol: String,
    shares: Decimal,
    purchase_price: Decimal,
    current_price: Option<Decimal>,
    cost: Decimal,
    market_value: Option<Decimal>,
    dollar_gain: Option<Decimal>,
    growth: Option<Decimal>,
    dividend_rate: Decimal,
    dividend_yield: Decimal,
    dividend_income: Decimal,
    industry: String,
    total_return: Option<Decimal>,
    total_return_percent: Option<Decimal>,
}
