#[cfg(test)]
mod tests {
    use crate::api::{FmpApi, MarketDataProvider};

    const SYMBOL: &str = "AAPL";

    #[tokio::test]
    #[ignore = "requires FMP_API_KEY and network access"]
    async fn fetch_returns_price_and_industry() {
        let api_key = std::env::var("FMP_API_KEY").unwrap();
        let api = FmpApi::new(api_key);

        let snapshot = api.fetch(SYMBOL).await.unwrap();

        assert!(snapshot.last_price().is_some());
        assert!(snapshot.industry().is_some());
        assert!(snapshot.fetched_at().is_some());
    }

    #[tokio::test]
    #[ignore = "requires FMP_API_KEY and network access"]
    async fn fetch_fails_for_an_unknown_symbol() {
        let api_key = std::env::var("FMP_API_KEY").unwrap();
        let api = FmpApi::new(api_key);

        let result = api.fetch("ZZZZZZZZZZ").await;

        assert!(result.is_err());
    }
}
