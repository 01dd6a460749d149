use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct FmpQuoteDto {
    symbol: String,
    name: Option<String>,
    price: Decimal,
    change: Option<Decimal>,
    change_percentage: Option<Decimal>,
    volume: Option<i64>,
    open: Option<Decimal>,
    previous_close: Option<Decimal>,
    timestamp: Option<i64>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct FmpProfileDto {
    symbol: String,
    company_name: Option<String>,
    currency: Option<String>,
    exchange: Option<String>,
    sector: Option<String>,
    industry: Option<String>,
    last_dividend: Option<Decimal>,
}
