//! Yahoo Finance quote source.
//!
//! Daily history comes from the `yahoo_finance_api` connector. Bars are dated
//! in the exchange's local time using the `gmtoffset` of the chart metadata.
//! Option chains come from the v7 options endpoint, which needs a cookie/crumb
//! pair that is requested anew for every chain fetch. Yahoo only serves the
//! live chain, so only today's date can be asked for.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use reqwest::header;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::RawQuote;
use crate::provider::QuoteSource;

use models::{YahooOptionChainResult, YahooOptionContract, YahooOptionsResponse};

/// Days fetched on each side of the requested range. Exchange offsets run
/// from UTC-12 to UTC+14, so one day covers every local session.
const WINDOW_PAD_DAYS: u64 = 1;

const PROVIDER_ID: &str = "YAHOO";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Decimal places kept when converting Yahoo's floating point prices.
const PRICE_SCALE: u32 = 6;

/// Settings for [`YahooQuoteSource`].
#[derive(Clone, Debug)]
pub struct YahooConfig {
    /// User agent sent on option chain requests
    pub user_agent: String,
    /// Timeout applied to each option chain HTTP request
    pub request_timeout: Duration,
    /// Upper bound on expirations fetched per chain, `None` for all listed
    pub max_expirations: Option<usize>,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(30),
            max_expirations: None,
        }
    }
}

/// Cookie and crumb for a single option chain fetch
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

/// Yahoo Finance quote source.
pub struct YahooQuoteSource {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
    config: YahooConfig,
}

impl YahooQuoteSource {
    /// Create a source with default settings.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(YahooConfig::default())
    }

    pub fn with_config(config: YahooConfig) -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| provider_error(format!("Failed to initialize Yahoo connector: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            connector,
            client,
            config,
        })
    }

    // ========================================================================
    // Crumb/Cookie Handshake
    // ========================================================================

    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| provider_error("Failed to parse Yahoo cookie".to_string()))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| provider_error(format!("Failed to read crumb: {}", e)))?;

        Ok(CrumbData { cookie, crumb })
    }

    // ========================================================================
    // Option Chain Fetching
    // ========================================================================

    /// Fetch one page of the chain. Without `expiration` Yahoo returns the
    /// nearest expiration's legs.
    async fn fetch_chain_page(
        &self,
        symbol: &str,
        expiration: Option<i64>,
        crumb: &CrumbData,
    ) -> Result<YahooOptionChainResult, MarketDataError> {
        let mut url = format!(
            "https://query2.finance.yahoo.com/v7/finance/options/{}?crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );
        if let Some(ts) = expiration {
            url.push_str(&format!("&date={}", ts));
        }

        let response = self
            .client
            .get(&url)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Option chain request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(provider_error("Yahoo authentication rejected".to_string()));
        }
        if !response.status().is_success() {
            return Err(provider_error(format!(
                "Option chain request returned HTTP {}",
                response.status()
            )));
        }

        let data: YahooOptionsResponse = response.json().await.map_err(|e| {
            provider_error(format!("Failed to parse option chain response: {}", e))
        })?;

        if let Some(error) = data.option_chain.error {
            let description = error
                .description
                .or(error.code)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(provider_error(description));
        }

        data.option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

// ============================================================================
// QuoteSource Implementation
// ============================================================================

#[async_trait]
impl QuoteSource for YahooQuoteSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_historical_quotes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawQuote>, MarketDataError> {
        debug!(
            "Fetching historical quotes for {} from {} to {} from Yahoo",
            ticker, start, end
        );

        if start > end {
            debug!("Empty range {} to {} for {}, nothing to fetch", start, end, ticker);
            return Ok(vec![]);
        }

        let (start_time, end_time) = request_window(start, end)?;

        let response = match self
            .connector
            .get_quote_history(ticker, start_time, end_time)
            .await
        {
            Ok(response) => response,
            Err(yahoo::YahooError::NoQuotes) => return Ok(vec![]),
            Err(yahoo::YahooError::NoResult) => {
                return Err(MarketDataError::SymbolNotFound(ticker.to_string()))
            }
            Err(e) => return Err(provider_error(e.to_string())),
        };

        let gmtoffset = match response.metadata() {
            Ok(meta) => meta.gmtoffset,
            Err(yahoo::YahooError::NoResult) => {
                return Err(MarketDataError::SymbolNotFound(ticker.to_string()))
            }
            Err(e) => return Err(provider_error(format!("Missing chart metadata: {}", e))),
        };

        match response.quotes() {
            Ok(bars) => Ok(sessions_in_range(
                bars.iter().map(|bar| (bar.timestamp, bar.close)),
                gmtoffset,
                start,
                end,
            )),
            Err(yahoo::YahooError::NoQuotes) => {
                warn!(
                    "No historical quotes returned for '{}' between {} and {}",
                    ticker, start, end
                );
                Ok(vec![])
            }
            Err(e) => Err(provider_error(e.to_string())),
        }
    }

    async fn fetch_option_quotes(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<Vec<RawQuote>, MarketDataError> {
        debug!("Fetching option chain for {} on {} from Yahoo", ticker, date);

        ensure_live_chain(date, &[Utc::now().date_naive(), Local::now().date_naive()])?;

        let crumb = self.fetch_crumb().await?;
        let first = self.fetch_chain_page(ticker, None, &crumb).await?;
        let (remaining, mut legs) = plan_chain_pages(first, self.config.max_expirations);

        for expiration in remaining {
            let page = self.fetch_chain_page(ticker, Some(expiration), &crumb).await?;
            for set in page.options {
                legs.extend(set.calls);
                legs.extend(set.puts);
            }
        }

        let quotes: Vec<RawQuote> = legs
            .iter()
            .filter_map(|leg| match contract_to_raw_quote(leg, date) {
                Ok(quote) => Some(quote),
                Err(e) => {
                    debug!("Skipping option leg {}: {}", leg.contract_symbol, e);
                    None
                }
            })
            .collect();

        debug!("Yahoo returned {} option legs for {}", quotes.len(), ticker);
        Ok(quotes)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn provider_error(message: String) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}

/// Midnight UTC of `date` for the Yahoo connector.
fn day_start(date: NaiveDate) -> Result<OffsetDateTime, MarketDataError> {
    let ts = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    OffsetDateTime::from_unix_timestamp(ts).map_err(|e| MarketDataError::ValidationFailed {
        message: format!("Date {} out of range: {}", date, e),
    })
}

/// Padded request window `[start - pad, end + 1 + pad)` in UTC.
fn request_window(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(OffsetDateTime, OffsetDateTime), MarketDataError> {
    let from = start.checked_sub_days(Days::new(WINDOW_PAD_DAYS)).unwrap_or(start);
    // Yahoo treats the end of the window as exclusive
    let to = end.checked_add_days(Days::new(WINDOW_PAD_DAYS + 1)).unwrap_or(end);
    Ok((day_start(from)?, day_start(to)?))
}

/// Convert `(timestamp, close)` bars and keep the sessions dated within
/// `[start, end]` on the exchange's calendar.
fn sessions_in_range(
    bars: impl Iterator<Item = (i64, f64)>,
    gmtoffset: i32,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<RawQuote> {
    bars.filter_map(|(timestamp, close)| match bar_to_raw_quote(timestamp, gmtoffset, close) {
        Ok(quote) => Some(quote),
        Err(e) => {
            warn!("Skipping bar due to conversion error: {:?}", e);
            None
        }
    })
    .filter(|quote| quote.session_date >= start && quote.session_date <= end)
    .collect()
}

/// Only the live chain exists upstream.
fn ensure_live_chain(date: NaiveDate, today: &[NaiveDate]) -> Result<(), MarketDataError> {
    if today.contains(&date) {
        return Ok(());
    }
    Err(MarketDataError::ValidationFailed {
        message: format!(
            "Historical option chains are unavailable from Yahoo (requested {})",
            date
        ),
    })
}

/// Split the first chain page into the expirations still to fetch and the
/// legs it already carries.
///
/// `max_expirations` keeps the nearest N listed expirations; `Some(0)` keeps
/// none. When Yahoo lists no expirations, the ones present on the page count
/// as listed.
fn plan_chain_pages(
    first: YahooOptionChainResult,
    max_expirations: Option<usize>,
) -> (Vec<i64>, Vec<YahooOptionContract>) {
    let mut wanted: Vec<i64> = if first.expiration_dates.is_empty() {
        first.options.iter().map(|set| set.expiration_date).collect()
    } else {
        first.expiration_dates
    };
    if let Some(max) = max_expirations {
        wanted.truncate(max);
    }

    let mut legs = Vec::new();
    let mut fetched = Vec::new();
    for set in first.options {
        if wanted.contains(&set.expiration_date) {
            fetched.push(set.expiration_date);
            legs.extend(set.calls);
            legs.extend(set.puts);
        }
    }

    let remaining = wanted.into_iter().filter(|e| !fetched.contains(e)).collect();
    (remaining, legs)
}

fn price_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(value).map(|d| d.round_dp(PRICE_SCALE).normalize())
}

fn unix_to_date(ts: i64) -> Result<NaiveDate, MarketDataError> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.date_naive())
        .ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("Invalid timestamp: {}", ts),
        })
}

/// Calendar date of `ts` on an exchange `gmtoffset` seconds east of UTC.
fn unix_to_exchange_date(ts: i64, gmtoffset: i32) -> Result<NaiveDate, MarketDataError> {
    FixedOffset::east_opt(gmtoffset)
        .and_then(|offset| offset.timestamp_opt(ts, 0).single())
        .map(|dt| dt.date_naive())
        .ok_or_else(|| MarketDataError::ValidationFailed {
            message: format!("Invalid timestamp {} at UTC offset {}s", ts, gmtoffset),
        })
}

/// Convert a daily bar into a quote dated on the exchange's calendar day.
fn bar_to_raw_quote(timestamp: i64, gmtoffset: i32, close: f64) -> Result<RawQuote, MarketDataError> {
    let session_date = unix_to_exchange_date(timestamp, gmtoffset)?;
    let close = price_to_decimal(close).ok_or_else(|| MarketDataError::ValidationFailed {
        message: format!("Failed to convert close price {} to Decimal", close),
    })?;

    Ok(RawQuote::new(session_date, close))
}

/// Convert a listed contract into an option leg quote for `session_date`.
///
/// The settlement value is the last traded price, falling back to the
/// bid/ask mid when the contract has not traded.
fn contract_to_raw_quote(
    contract: &YahooOptionContract,
    session_date: NaiveDate,
) -> Result<RawQuote, MarketDataError> {
    let price = contract
        .last_price
        .filter(|p| *p > 0.0)
        .or_else(|| match (contract.bid, contract.ask) {
            (Some(bid), Some(ask)) if bid > 0.0 && ask > 0.0 => Some((bid + ask) / 2.0),
            _ => None,
        })
        .and_then(price_to_decimal)
        .ok_or_else(|| MarketDataError::ValidationFailed {
            message: "No traded price or two-sided market".to_string(),
        })?;

    let strike = price_to_decimal(contract.strike).ok_or_else(|| MarketDataError::ValidationFailed {
        message: format!("Invalid strike {}", contract.strike),
    })?;

    Ok(RawQuote::option_leg(
        session_date,
        price,
        contract.contract_symbol.clone(),
        strike,
        unix_to_date(contract.expiration)?,
    ))
}

// ============================================================================
// Tests
// ============================================================================
