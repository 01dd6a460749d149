#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{app::calc::compute_entry, models::MarketSnapshot};

    fn snapshot(
        last_price: Option<Decimal>,
        dividend_yield: Option<Decimal>,
        dividend_rate: Option<Decimal>,
        industry: Option<&str>,
    ) -> MarketSnapshot {
        MarketSnapshot::new(
            last_price,
            dividend_yield,
            dividend_rate,
            industry.map(String::from),
            None,
        )
    }

    #[test]
    fn cost_is_the_exact_product_of_shares_and_price() {
        let entry = compute_entry(
            "AAPL",
            dec!(3.56),
            dec!(220.52),
            &MarketSnapshot::unavailable(),
        );

        assert_eq!(*entry.cost(), dec!(785.0512));
    }

    #[test]
    fn full_metric_set_with_complete_market_data() {
        let market = snapshot(
            Some(dec!(150)),
            Some(dec!(0.02)),
            Some(dec!(3)),
            Some("Consumer Electronics"),
        );
        let entry = compute_entry("AAPL", dec!(10), dec!(100), &market);

        assert_eq!(entry.symbol(), "AAPL");
        assert_eq!(*entry.cost(), dec!(1000));
        assert_eq!(*entry.current_price(), Some(dec!(150)));
        assert_eq!(*entry.market_value(), Some(dec!(1500)));
        assert_eq!(*entry.dollar_gain(), Some(dec!(500)));
        assert_eq!(*entry.growth(), Some(dec!(0.5)));
        assert_eq!(*entry.dividend_rate(), dec!(3));
        assert_eq!(*entry.dividend_yield(), dec!(0.02));
        assert_eq!(*entry.dividend_income(), dec!(30));
        assert_eq!(entry.industry(), "Consumer Electronics");
        assert_eq!(*entry.total_return(), Some(dec!(530)));
        assert_eq!(*entry.total_return_percent(), Some(dec!(0.53)));
    }

    #[test]
    fn missing_price_leaves_market_fields_absent() {
        let entry = compute_entry(
            "XYZ",
            dec!(5),
            dec!(50),
            &MarketSnapshot::unavailable(),
        );

        assert_eq!(*entry.cost(), dec!(250));
        assert_eq!(*entry.current_price(), None);
        assert_eq!(*entry.market_value(), None);
        assert_eq!(*entry.dollar_gain(), None);
        assert_eq!(*entry.growth(), None);
        assert_eq!(*entry.total_return(), None);
        assert_eq!(*entry.total_return_percent(), None);
        assert_eq!(*entry.dividend_yield(), Decimal::ZERO);
        assert_eq!(*entry.dividend_rate(), Decimal::ZERO);
        assert_eq!(*entry.dividend_income(), Decimal::ZERO);
        assert_eq!(entry.industry(), "Unknown");
    }

    #[test]
    fn zero_cost_never_divides() {
        let market = snapshot(Some(dec!(150)), None, None, None);

        // Free shares: gain is real, but the ratios over cost stay absent
        let entry = compute_entry("FREE", dec!(10), dec!(0), &market);
        assert_eq!(*entry.cost(), Decimal::ZERO);
        assert_eq!(*entry.dollar_gain(), Some(dec!(1500)));
        assert_eq!(*entry.growth(), None);
        assert_eq!(*entry.total_return(), Some(dec!(1500)));
        assert_eq!(*entry.total_return_percent(), None);

        // Zero shares
        let entry = compute_entry("NONE", dec!(0), dec!(100), &market);
        assert_eq!(*entry.cost(), Decimal::ZERO);
        assert_eq!(*entry.market_value(), Some(Decimal::ZERO));
        assert_eq!(*entry.growth(), None);
        assert_eq!(*entry.total_return_percent(), None);
    }

    #[test]
    fn zero_gain_still_reports_total_return() {
        let market = snapshot(Some(dec!(25)), Some(dec!(0.01)), Some(dec!(0.25)), None);
        let entry = compute_entry("FLAT", dec!(4), dec!(25), &market);

        assert_eq!(*entry.dollar_gain(), Some(Decimal::ZERO));
        assert_eq!(*entry.growth(), Some(Decimal::ZERO));
        assert_eq!(*entry.dividend_income(), dec!(1));
        assert_eq!(*entry.total_return(), Some(dec!(1)));
        assert_eq!(*entry.total_return_percent(), Some(dec!(0.01)));
    }

    #[test]
    fn partial_snapshot_keeps_industry() {
        let market = snapshot(None, None, None, Some("Banks"));
        let entry = compute_entry("HSBC", dec!(2), dec!(40), &market);

        assert_eq!(entry.industry(), "Banks");
        assert_eq!(*entry.market_value(), None);
        assert_eq!(*entry.dividend_income(), Decimal::ZERO);
    }
}
