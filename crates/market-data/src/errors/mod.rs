//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: failures reported by a quote source collaborator
//! - [`QueryError`]: the caller-visible failure of a query operation
//! - [`ErrorKind`]: a flat tag for matching on [`QueryError`] without its payload

mod kind;

pub use kind::ErrorKind;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by a quote source while talking to its upstream provider.
///
/// These never cross the engine boundary as-is: the engine folds every one
/// of them into [`QueryError::ProviderUnavailable`], keeping the message.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider does not know the requested symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered with data that could not be converted.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Failure of a query operation.
///
/// Every public engine operation returns `Result<_, QueryError>`; an `Err`
/// never carries a payload.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Only the `close` field is served.
    #[error("Unsupported field '{0}': only 'close' is available")]
    UnsupportedField(String),

    /// The quote source failed. The message embeds the underlying cause.
    #[error("Quote provider unavailable for {ticker}: {message}")]
    ProviderUnavailable {
        /// The ticker as sent to the provider
        ticker: String,
        /// Description of the underlying failure
        message: String,
    },

    /// The quote source returned no rows for the requested range.
    #[error("Empty dataset for {ticker} between {start} and {end}")]
    EmptyDataset {
        ticker: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// A single-point request did not resolve to exactly one quote on the
    /// requested date.
    #[error("Quote not available for {ticker} on {date}: got {count} row(s){}", dated_suffix(.found))]
    InconsistentSinglePoint {
        ticker: String,
        date: NaiveDate,
        count: usize,
        /// Date of the sole row when exactly one came back
        found: Option<NaiveDate>,
    },

    /// The query's data type tag is not one the engine serves.
    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),

    /// The surface builder rejected the option chain. Carries its message verbatim.
    #[error("{0}")]
    SurfaceBuildFailure(String),
}

fn dated_suffix(found: &Option<NaiveDate>) -> String {
    found.map(|d| format!(" dated {}", d)).unwrap_or_default()
}

impl QueryError {
    /// Returns the flat classification of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use quotedesk_market_data::errors::{ErrorKind, QueryError};
    ///
    /// let error = QueryError::UnsupportedField("open".to_string());
    /// assert_eq!(error.kind(), ErrorKind::UnsupportedField);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedField(_) => ErrorKind::UnsupportedField,
            Self::ProviderUnavailable { .. } => ErrorKind::ProviderUnavailable,
            Self::EmptyDataset { .. } => ErrorKind::EmptyDataset,
            Self::InconsistentSinglePoint { .. } => ErrorKind::InconsistentSinglePoint,
            Self::UnsupportedDataType(_) => ErrorKind::UnsupportedDataType,
            Self::SurfaceBuildFailure(_) => ErrorKind::SurfaceBuildFailure,
        }
    }

    /// Reclassify a quote source failure, keeping its description.
    pub fn provider_unavailable(ticker: impl Into<String>, cause: &MarketDataError) -> Self {
        Self::ProviderUnavailable {
            ticker: ticker.into(),
            message: cause.to_string(),
        }
    }
}
