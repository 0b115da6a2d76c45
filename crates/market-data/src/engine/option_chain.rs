use chrono::NaiveDate;
use log::{debug, warn};

use super::QueryEngine;
use crate::errors::QueryError;
use crate::models::{OptionPriceSurface, OptionQuoteView};

impl QueryEngine {
    /// Option price surface for `ticker` from the chain listed on `date`.
    ///
    /// The chain is a snapshot: no date range, no count check. An empty
    /// chain still goes to the surface builder, whose outcome is returned.
    pub async fn option_chain(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<OptionPriceSurface, QueryError> {
        let symbol = self.preparser.preparse(ticker);
        debug!("Fetching option chain for {} on {} via '{}'", symbol, date, self.source.id());

        let quotes = self
            .source
            .fetch_option_quotes(&symbol, date)
            .await
            .map_err(|e| {
                warn!("Quote source '{}' failed for {} options: {}", self.source.id(), symbol, e);
                QueryError::provider_unavailable(symbol.as_str(), &e)
            })?;

        let views: Vec<OptionQuoteView> = quotes.iter().map(OptionQuoteView::from).collect();
        debug!("Building surface for {} from {} legs", symbol, views.len());

        self.surface_builder
            .build(&symbol, date, &views)
            .map_err(|e| QueryError::SurfaceBuildFailure(e.message))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use super::super::test_support::{date, engine, MockSource, RecordingBuilder};
    use crate::errors::{ErrorKind, QueryError};
    use crate::models::RawQuote;

    fn three_legs() -> Vec<RawQuote> {
        let session = date(2011, 1, 31);
        let march = date(2011, 3, 18);
        vec![
            RawQuote::option_leg(session, dec!(3.1), "GRF110318C00012000", dec!(12), march),
            RawQuote::option_leg(session, dec!(1.25), "GRF110318C00015000", dec!(15), march),
            RawQuote::option_leg(session, dec!(0.4), "GRF110318P00012000", dec!(12), march),
        ]
    }

    #[tokio::test]
    async fn test_builder_receives_every_leg() {
        let source = Arc::new(MockSource::returning(three_legs()));
        let builder = Arc::new(RecordingBuilder::default());
        let engine = engine(&source, &builder);

        let surface = engine.option_chain("GRF", date(2011, 1, 31)).await.unwrap();

        let received = builder.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].len(), 3);
        assert_eq!(received[0][1].contract_code.as_deref(), Some("GRF110318C00015000"));
        assert_eq!(received[0][1].strike, Some(dec!(15)));
        assert_eq!(received[0][1].settlement_value, dec!(1.25));

        assert_eq!(surface.points.len(), 3);
        assert_eq!(surface.as_of, date(2011, 1, 31));
        assert_eq!(source.option_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.historical_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_builder_error_is_returned_verbatim() {
        let source = Arc::new(MockSource::returning(three_legs()));
        let builder = Arc::new(RecordingBuilder::failing("strike grid is not monotonic"));
        let engine = engine(&source, &builder);

        let err = engine.option_chain("GRF", date(2011, 1, 31)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SurfaceBuildFailure);
        assert_eq!(err.to_string(), "strike grid is not monotonic");
    }

    #[tokio::test]
    async fn test_empty_chain_still_reaches_builder() {
        let source = Arc::new(MockSource::returning(vec![]));
        let builder = Arc::new(RecordingBuilder::default());
        let engine = engine(&source, &builder);

        let surface = engine.option_chain("GRF", date(2011, 1, 31)).await.unwrap();

        assert!(surface.is_empty());
        assert_eq!(builder.received.lock().unwrap()[0].len(), 0);
    }

    #[tokio::test]
    async fn test_source_failure_skips_builder() {
        let source = Arc::new(MockSource::failing("timed out"));
        let builder = Arc::new(RecordingBuilder::default());
        let engine = engine(&source, &builder);

        let err = engine.option_chain("GRF", date(2011, 1, 31)).await.unwrap_err();

        assert!(matches!(err, QueryError::ProviderUnavailable { .. }));
        assert!(builder.received.lock().unwrap().is_empty());
    }
}
