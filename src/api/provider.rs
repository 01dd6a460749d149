use anyhow::Result;

use crate::models::MarketSnapshot;

/// The one capability the portfolio needs from a market-data source: price,
/// dividend and industry data for an uppercase ticker symbol.
///
/// Partial data is expected. Implementations leave unavailable fields unset
/// rather than failing; an `Err` means the symbol could not be resolved at
/// all, and callers degrade it to [`MarketSnapshot::unavailable`].
#[allow(async_fn_in_trait)]
pub trait MarketDataProvider {
    async fn fetch(&self, symbol: &str) -> Result<MarketSnapshot>;
}
