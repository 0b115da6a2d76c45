use log::{debug, warn};

use super::QueryEngine;
use crate::errors::QueryError;
use crate::models::{DataType, Payload, Query, CLOSE_FIELD};

impl QueryEngine {
    /// Route a query to the operation its data type calls for.
    ///
    /// The field is checked here for every data type, so an unsupported
    /// field never reaches a quote source. Failures from below are returned
    /// unchanged.
    pub async fn dispatch(&self, query: &Query) -> Result<Payload, QueryError> {
        if query.field != CLOSE_FIELD {
            warn!("Rejecting '{}' query for {}", query.field, query.ticker);
            return Err(QueryError::UnsupportedField(query.field.clone()));
        }

        debug!(
            "Dispatching {} query for {} on {}",
            query.data_type, query.ticker, query.date
        );

        let result = match query.data_type {
            DataType::Scalar => self
                .single_point(&query.ticker, query.date, &query.field)
                .await
                .map(Payload::Point),
            DataType::TimeSeries => self
                .time_series(&query.ticker, query.date, query.end_date, &query.field)
                .await
                .map(Payload::Series),
            DataType::OptionChain => self
                .option_chain(&query.ticker, query.date)
                .await
                .map(Payload::Surface),
        };

        if let Err(e) = &result {
            warn!("{} query for {} failed: {}", query.data_type, query.ticker, e);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use super::super::test_support::{date, engine, MockSource, RecordingBuilder};
    use crate::errors::ErrorKind;
    use crate::models::{DatedScalar, Payload, Query, RawQuote};

    #[tokio::test]
    async fn test_scalar_query_returns_point() {
        let source = Arc::new(MockSource::returning(vec![RawQuote::new(date(2011, 1, 31), dec!(123.4))]));
        let engine = engine(&source, &Arc::new(RecordingBuilder::default()));

        let payload = engine.dispatch(&Query::scalar("GRF", date(2011, 1, 31))).await.unwrap();

        assert_eq!(
            payload,
            Payload::Point(DatedScalar::new(date(2011, 1, 31), dec!(123.4)))
        );
    }

    #[tokio::test]
    async fn test_scalar_query_ignores_end_date() {
        let source = Arc::new(MockSource::returning(vec![RawQuote::new(date(2011, 1, 31), dec!(123.4))]));
        let engine = engine(&source, &Arc::new(RecordingBuilder::default()));

        let mut query = Query::scalar("GRF", date(2011, 1, 31));
        query.end_date = date(2011, 12, 31);
        engine.dispatch(&query).await.unwrap();

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[0].1, date(2011, 1, 31));
        assert_eq!(requests[0].2, date(2011, 1, 31));
    }

    #[tokio::test]
    async fn test_time_series_query_returns_series() {
        let source = Arc::new(MockSource::returning(vec![
            RawQuote::new(date(2011, 1, 27), dec!(12.05)),
            RawQuote::new(date(2011, 1, 28), dec!(12.10)),
        ]));
        let engine = engine(&source, &Arc::new(RecordingBuilder::default()));

        let payload = engine
            .dispatch(&Query::time_series("GRF", date(2011, 1, 27), date(2011, 1, 28)))
            .await
            .unwrap();

        assert_eq!(payload.as_series().map(|s| s.len()), Some(2));
        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[0].2, date(2011, 1, 28));
    }

    #[tokio::test]
    async fn test_option_chain_query_returns_surface() {
        let session = date(2011, 1, 31);
        let source = Arc::new(MockSource::returning(vec![RawQuote::option_leg(
            session,
            dec!(1.25),
            "GRF110318C00015000",
            dec!(15),
            date(2011, 3, 18),
        )]));
        let builder = Arc::new(RecordingBuilder::default());
        let engine = engine(&source, &builder);

        let payload = engine.dispatch(&Query::option_chain("GRF", session)).await.unwrap();

        let surface = payload.as_surface().unwrap();
        assert_eq!(surface.points.len(), 1);
        assert_eq!(source.option_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.historical_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unsupported_field_makes_no_call() {
        let source = Arc::new(MockSource::returning(vec![RawQuote::new(date(2011, 1, 31), dec!(1))]));
        let builder = Arc::new(RecordingBuilder::default());
        let engine = engine(&source, &builder);

        for query in [
            Query::scalar("XYZ", date(2011, 1, 31)).with_field("open"),
            Query::option_chain("XYZ", date(2011, 1, 31)).with_field("volume"),
        ] {
            let err = engine.dispatch(&query).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedField);
        }

        assert_eq!(source.calls(), 0);
        assert!(builder.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_has_no_payload() {
        let source = Arc::new(MockSource::failing("HTTP 500"));
        let engine = engine(&source, &Arc::new(RecordingBuilder::default()));

        let result = engine.dispatch(&Query::scalar("GRF", date(2011, 1, 31))).await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
        assert!(err.to_string().contains("HTTP 500"));
    }
}
