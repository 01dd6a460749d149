use anyhow::{Context, Result};
use clap::Parser;

use investment_portfolio_tui::{
    api::FmpApi,
    app::{App, Portfolio},
};

/// Terminal investment portfolio tracker.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Financial Modeling Prep API key; falls back to FMP_API_KEY.
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let api_key = match args.api_key {
        Some(key) => key,
        None => std::env::var("FMP_API_KEY")
            .context("Missing FMP API key: pass --api-key or set FMP_API_KEY")?,
    };

    let portfolio = Portfolio::new(FmpApi::new(api_key));
    let mut app = App::new(portfolio);
    app.run().await?;

    Ok(())
}
