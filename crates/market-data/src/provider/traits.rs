//! Quote source trait definitions.
//!
//! This module defines the `QuoteSource` trait that every upstream
//! market data client implements.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::RawQuote;

/// Trait for quote sources.
///
/// Implement this trait to plug a new upstream provider into the engine.
/// Implementations receive tickers that have already been through the
/// configured [`SymbolPreparser`](crate::resolver::SymbolPreparser).
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use quotedesk_market_data::provider::QuoteSource;
///
/// struct CsvSource {
///     rows: Vec<RawQuote>,
/// }
///
/// #[async_trait]
/// impl QuoteSource for CsvSource {
///     fn id(&self) -> &'static str {
///         "CSV"
///     }
///
///     // ... implement fetch methods
/// }
/// ```
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Unique identifier for this source, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch daily quotes for a ticker.
    ///
    /// # Arguments
    ///
    /// * `ticker` - Provider-ready symbol
    /// * `start` - First session (inclusive)
    /// * `end` - Last session (inclusive)
    ///
    /// # Returns
    ///
    /// One quote per session, ordered by session date ascending. A range
    /// with no sessions is an empty vector, not an error.
    async fn fetch_historical_quotes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawQuote>, MarketDataError>;

    /// Fetch every option leg listed for an underlying on a date.
    ///
    /// Returned quotes carry contract code, strike and maturity.
    async fn fetch_option_quotes(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<Vec<RawQuote>, MarketDataError>;
}
