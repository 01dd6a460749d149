#[cfg(test)]
mod tests {
    use anyhow::{Error, Result};
    use chrono::Local;
    use rust_decimal_macros::dec;

    use crate::{
        api::MarketDataProvider,
        app::{
            calc::compute_entry,
            portfolio::{Portfolio, prepend},
        },
        models::{HoldingEntry, MarketSnapshot},
    };

    struct StubApi {
        snapshot: Option<MarketSnapshot>,
    }

    impl MarketDataProvider for StubApi {
        async fn fetch(&self, _symbol: &str) -> Result<MarketSnapshot> {
            self.snapshot
                .clone()
                .ok_or_else(|| Error::msg("stub: symbol not found"))
        }
    }

    fn entry(symbol: &str) -> HoldingEntry {
        compute_entry(symbol, dec!(1), dec!(10), &MarketSnapshot::unavailable())
    }

    #[test]
    fn prepend_puts_the_newest_entry_first() {
        let table = prepend(&[], entry("A"));
        let table = prepend(&table, entry("B"));

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].symbol(), "B");
        assert_eq!(table[1].symbol(), "A");
    }

    #[test]
    fn prepend_does_not_mutate_its_input() {
        let original = vec![entry("A")];
        let result = prepend(&original, entry("B"));

        assert_eq!(original.len(), 1);
        assert_eq!(original[0].symbol(), "A");
        assert_eq!(result[0].symbol(), "B");
        assert_eq!(result[1], original[0]);
    }

    #[tokio::test]
    async fn add_lot_uppercases_and_prepends() {
        let snapshot = MarketSnapshot::new(
            Some(dec!(150)),
            Some(dec!(0.02)),
            Some(dec!(3)),
            Some(String::from("Consumer Electronics")),
            Some(Local::now()),
        );
        let mut portfolio = Portfolio::new(StubApi {
            snapshot: Some(snapshot),
        });

        portfolio.add_lot(" aapl ", dec!(10), dec!(100)).await;
        portfolio.add_lot("msft", dec!(2), dec!(300)).await;

        let entries = portfolio.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symbol(), "MSFT");
        assert_eq!(entries[1].symbol(), "AAPL");
        assert_eq!(*entries[1].market_value(), Some(dec!(1500)));
        assert!(portfolio.last_updated().is_some());
    }

    #[tokio::test]
    async fn add_lot_degrades_when_the_provider_fails() {
        let mut portfolio = Portfolio::new(StubApi { snapshot: None });

        let entry = portfolio.add_lot("AAPL", dec!(5), dec!(50)).await;

        assert_eq!(*entry.cost(), dec!(250));
        assert_eq!(*entry.current_price(), None);
        assert_eq!(*entry.dollar_gain(), None);
        assert_eq!(entry.industry(), "Unknown");
        assert_eq!(portfolio.entries().len(), 1);
        assert!(portfolio.last_updated().is_none());
    }
}
