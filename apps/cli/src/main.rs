//! Command-line host that answers one market data query and prints it as JSON.
//!
//! ```text
//! # Closing price on a date
//! quotedesk GRF 2011-01-31
//!
//! # Closing prices over a range
//! quotedesk GRF 2011-01-03 --end-date 2011-01-31 --data-type timeseries
//!
//! # Option price surface (today's live chain only)
//! quotedesk AAPL 2024-06-03 --data-type optionchain
//! ```

mod config;
mod main_lib;

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use quotedesk_market_data::Query;

use config::Config;
use main_lib::{build_engine, init_tracing};

#[derive(Parser)]
#[command(name = "quotedesk")]
#[command(about = "Answer a market data query and print the result as JSON")]
#[command(version)]
struct Cli {
    /// Ticker as typed by the user
    ticker: String,

    /// Query date (YYYY-MM-DD), or range start for time series
    date: NaiveDate,

    /// Range end for time series (defaults to the query date)
    #[arg(short, long)]
    end_date: Option<NaiveDate>,

    /// Requested field
    #[arg(short, long, default_value = "close")]
    field: String,

    /// scalar, timeseries or optionchain
    #[arg(short = 't', long, default_value = "scalar")]
    data_type: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    let query = match Query::parse(
        cli.ticker,
        cli.field,
        &cli.data_type,
        cli.date,
        cli.end_date,
    ) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{}: {}", e.kind(), e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let engine = build_engine(&config)?;
    tracing::info!(
        "Dispatching {} query for {} via {}",
        query.data_type,
        query.ticker,
        engine.source_id()
    );

    match engine.dispatch(&query).await {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}: {}", e.kind(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}
