//! Yahoo Finance API response models.
//!
//! These models are used for parsing the v7 options API responses, which the
//! `yahoo_finance_api` connector does not cover.

use serde::Deserialize;

/// Main response wrapper for the options API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooOptionsResponse {
    pub option_chain: YahooOptionChain,
}

/// Option chain container
#[derive(Debug, Deserialize)]
pub struct YahooOptionChain {
    #[serde(default)]
    pub result: Vec<YahooOptionChainResult>,
    pub error: Option<YahooApiError>,
}

#[derive(Debug, Deserialize)]
pub struct YahooApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// One page of the chain: all listed expirations plus the legs of one of them
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooOptionChainResult {
    pub underlying_symbol: Option<String>,
    /// Unix timestamps of every listed expiration
    #[serde(default)]
    pub expiration_dates: Vec<i64>,
    #[serde(default)]
    pub options: Vec<YahooOptionSet>,
}

/// Calls and puts for a single expiration
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooOptionSet {
    pub expiration_date: i64,
    #[serde(default)]
    pub calls: Vec<YahooOptionContract>,
    #[serde(default)]
    pub puts: Vec<YahooOptionContract>,
}

/// A single listed contract
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct YahooOptionContract {
    pub contract_symbol: String,
    pub strike: f64,
    pub last_price: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    /// Unix timestamp of the contract's expiration
    pub expiration: i64,
    // Note: volume, openInterest, impliedVolatility exist but are not read
}
