use anyhow::{Context, Error, Result};
use chrono::Local;
use reqwest::Client;

use crate::{
    api::{
        fmp_dto::{FmpProfileDto, FmpQuoteDto},
        provider::MarketDataProvider,
        utils::{make_request, parse_response_array},
    },
    models::MarketSnapshot,
};

const BASE_URL: &str = "https://financialmodelingprep.com/stable";

#[derive(Clone, Debug)]
pub struct FmpApi {
    client: Client,
    api_key: String,
}

impl FmpApi {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    async fn get_quote(&self, symbol: &str) -> Result<FmpQuoteDto> {
        let endpoint = format!("quote?symbol={}", symbol);
        let res = make_request(&self.client, BASE_URL, &endpoint, &self.api_key).await?;

        let quotes = parse_response_array::<FmpQuoteDto>(
            res,
            &format!("No quote data for symbol {}", symbol),
        )?;

        quotes
            .into_iter()
            .next()
            .ok_or_else(|| Error::msg(format!("No quote data for symbol {}", symbol)))
    }

    async fn get_profile(&self, symbol: &str) -> Result<FmpProfileDto> {
        let endpoint = format!("profile?symbol={}", symbol);
        let res = make_request(&self.client, BASE_URL, &endpoint, &self.api_key).await?;

        let profiles = parse_response_array::<FmpProfileDto>(
            res,
            &format!("No profile data for symbol {}", symbol),
        )?;

        profiles
            .into_iter()
            .next()
            .ok_or_else(|| Error::msg(format!("No profile data for symbol {}", symbol)))
    }
}

impl MarketDataProvider for FmpApi {
    /// Combines the quote and profile endpoints into one snapshot. Either
    /// endpoint may fail on its own; whichever succeeds contributes its
    /// fields. Only when both fail does the fetch report an error.
    async fn fetch(&self, symbol: &str) -> Result<MarketSnapshot> {
        let quote = self.get_quote(symbol).await;
        let profile = self.get_profile(symbol).await;

        let (quote, profile) = match (quote, profile) {
            (Err(err), Err(_)) => {
                return Err(err).with_context(|| format!("FMP ({})", symbol));
            }
            (quote, profile) => (quote.ok(), profile.ok()),
        };

        let last_price = quote.as_ref().map(|q| *q.price());
        let dividend_rate = profile.as_ref().and_then(|p| *p.last_dividend());

        // The quote endpoint carries no yield field; derive it from the
        // annual rate against the last price.
        let dividend_yield = match (last_price, dividend_rate) {
            (Some(price), Some(rate)) if !price.is_zero() => Some(rate / price),
            _ => None,
        };

        let industry = profile.and_then(|p| p.industry().clone());

        Ok(MarketSnapshot::new(
            last_price,
            dividend_yield,
            dividend_rate,
            industry,
            Some(Local::now()),
        ))
    }
}
