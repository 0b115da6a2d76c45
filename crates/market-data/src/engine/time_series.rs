use chrono::NaiveDate;
use log::{debug, warn};

use super::QueryEngine;
use crate::errors::QueryError;
use crate::models::{DatedScalar, CLOSE_FIELD};

impl QueryEngine {
    /// Dated closing values of `ticker` over `[start, end]`.
    ///
    /// 1. Reject any field other than `close` before touching the source
    /// 2. Pre-parse the ticker and fetch the range
    /// 3. Fold source failures into `ProviderUnavailable`
    /// 4. Reject an empty answer
    /// 5. Map each quote to a `DatedScalar`, keeping the source's order
    pub async fn time_series(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        field: &str,
    ) -> Result<Vec<DatedScalar>, QueryError> {
        self.symbol_series(ticker, start, end, field)
            .await
            .map(|(_, series)| series)
    }

    /// Same as [`Self::time_series`], also handing back the pre-parsed symbol
    /// that was sent to the source.
    pub(super) async fn symbol_series(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        field: &str,
    ) -> Result<(String, Vec<DatedScalar>), QueryError> {
        if field != CLOSE_FIELD {
            return Err(QueryError::UnsupportedField(field.to_string()));
        }

        let symbol = self.preparser.preparse(ticker);
        debug!(
            "Fetching {} from {} to {} via '{}'",
            symbol,
            start,
            end,
            self.source.id()
        );

        let quotes = self
            .source
            .fetch_historical_quotes(&symbol, start, end)
            .await
            .map_err(|e| {
                warn!("Quote source '{}' failed for {}: {}", self.source.id(), symbol, e);
                QueryError::provider_unavailable(symbol.as_str(), &e)
            })?;

        if quotes.is_empty() {
            return Err(QueryError::EmptyDataset {
                ticker: symbol,
                start,
                end,
            });
        }

        let series = quotes.iter().map(DatedScalar::from).collect();
        Ok((symbol, series))
    }
}
