use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Market data for one symbol as supplied by a provider. Every field is
/// optional: a provider that cannot supply a value leaves it unset instead
/// of failing the fetch.
#[derive(Clone, Debug, Default, Getters, new)]
pub struct MarketSnapshot {
    last_price: Option<Decimal>,
    dividend_yield: Option<Decimal>,
    dividend_rate: Option<Decimal>,
    industry: Option<String>,
    fetched_at: Option<DateTime<Local>>,
}

impl MarketSnapshot {
    /// Snapshot substituted when a fetch fails outright.
    pub fn unavailable() -> Self {
        Self::default()
    }
}
