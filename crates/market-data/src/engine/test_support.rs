//! Collaborator doubles shared by the engine tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::QueryEngine;
use crate::errors::MarketDataError;
use crate::models::{OptionPriceSurface, OptionQuoteView, RawQuote};
use crate::provider::QuoteSource;
use crate::resolver::{PassthroughPreparser, SymbolPreparser};
use crate::surface::{GridSurfaceBuilder, SurfaceBuildError, SurfaceBuilder};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Quote source returning canned rows, or failing with a provider error.
pub struct MockSource {
    rows: Vec<RawQuote>,
    failure: Option<String>,
    pub historical_calls: AtomicUsize,
    pub option_calls: AtomicUsize,
    pub requests: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
}

impl MockSource {
    pub fn returning(rows: Vec<RawQuote>) -> Self {
        Self {
            rows,
            failure: None,
            historical_calls: AtomicUsize::new(0),
            option_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::returning(vec![])
        }
    }

    pub fn calls(&self) -> usize {
        self.historical_calls.load(Ordering::SeqCst) + self.option_calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<Vec<RawQuote>, MarketDataError> {
        match &self.failure {
            Some(message) => Err(MarketDataError::ProviderError {
                provider: "MOCK".to_string(),
                message: message.clone(),
            }),
            None => Ok(self.rows.clone()),
        }
    }
}

#[async_trait]
impl QuoteSource for MockSource {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn fetch_historical_quotes(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawQuote>, MarketDataError> {
        self.historical_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((ticker.to_string(), start, end));
        self.answer()
    }

    async fn fetch_option_quotes(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<Vec<RawQuote>, MarketDataError> {
        self.option_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((ticker.to_string(), date, date));
        self.answer()
    }
}

/// Surface builder that records its input and delegates or fails.
#[derive(Default)]
pub struct RecordingBuilder {
    failure: Option<String>,
    pub received: Mutex<Vec<Vec<OptionQuoteView>>>,
}

impl RecordingBuilder {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }
}

impl SurfaceBuilder for RecordingBuilder {
    fn build(
        &self,
        underlying: &str,
        as_of: NaiveDate,
        quotes: &[OptionQuoteView],
    ) -> Result<OptionPriceSurface, SurfaceBuildError> {
        self.received.lock().unwrap().push(quotes.to_vec());
        match &self.failure {
            Some(message) => Err(SurfaceBuildError::new(message.clone())),
            None => GridSurfaceBuilder.build(underlying, as_of, quotes),
        }
    }
}

/// Appends a fixed suffix and counts how often it is asked to.
pub struct CountingPreparser {
    suffix: String,
    calls: AtomicUsize,
}

impl CountingPreparser {
    pub fn with_suffix(suffix: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SymbolPreparser for CountingPreparser {
    fn preparse(&self, ticker: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        format!("{}{}", ticker, self.suffix)
    }
}

pub fn engine(source: &Arc<MockSource>, builder: &Arc<RecordingBuilder>) -> QueryEngine {
    QueryEngine::new(
        source.clone(),
        Arc::new(PassthroughPreparser),
        builder.clone(),
    )
}
