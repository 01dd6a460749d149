use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::{
    api::MarketDataProvider,
    app::calc,
    models::{HoldingEntry, MarketSnapshot},
};

/// Returns a new table with `entry` first, then the prior rows in unchanged
/// order. The input slice is left untouched, so the rendering layer never
/// observes a half-updated table.
pub fn prepend(entries: &[HoldingEntry], entry: HoldingEntry) -> Vec<HoldingEntry> {
    let mut next = Vec::with_capacity(entries.len() + 1);
    next.push(entry);
    next.extend_from_slice(entries);
    next
}

/// The session's holdings table plus the provider used to price new lots.
/// Rows only accumulate: the table starts empty and dies with the session.
pub struct Portfolio<P: MarketDataProvider> {
    entries: Vec<HoldingEntry>,
    provider: P,
    last_updated: Option<DateTime<Local>>,
}

impl<P: MarketDataProvider> Portfolio<P> {
    pub fn new(provider: P) -> Self {
        Self {
            entries: Vec::new(),
            provider,
            last_updated: None,
        }
    }

    /// Entries in insertion order, most recent first.
    pub fn entries(&self) -> &[HoldingEntry] {
        &self.entries
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Records one purchase lot. A failed fetch is not an error: the lot is
    /// still added, with every market-dependent metric absent.
    pub async fn add_lot(
        &mut self,
        symbol: &str,
        shares: Decimal,
        purchase_price: Decimal,
    ) -> HoldingEntry {
        let symbol = symbol.trim().to_uppercase();

        let snapshot = match self.provider.fetch(&symbol).await {
            Ok(snapshot) => snapshot,
            Err(_) => MarketSnapshot::unavailable(),
        };

        if let Some(fetched_at) = snapshot.fetched_at() {
            self.last_updated = Some(*fetched_at);
        }

        let entry = calc::compute_entry(&symbol, shares, purchase_price, &snapshot);
        self.entries = prepend(&self.entries, entry.clone());

        entry
    }
}
