use chrono::NaiveDate;

use super::QueryEngine;
use crate::errors::QueryError;
use crate::models::DatedScalar;

impl QueryEngine {
    /// The value of `field` for `ticker` on exactly `date`.
    ///
    /// Runs the time-series path over `[date, date]` and then requires a
    /// single row dated `date`, whatever the source claims to have done.
    pub async fn single_point(
        &self,
        ticker: &str,
        date: NaiveDate,
        field: &str,
    ) -> Result<DatedScalar, QueryError> {
        let (symbol, series) = self.symbol_series(ticker, date, date, field).await?;

        match series.as_slice() {
            [point] if point.timestamp == date => Ok(*point),
            rows => Err(QueryError::InconsistentSinglePoint {
                ticker: symbol,
                date,
                count: rows.len(),
                found: match rows {
                    [point] => Some(point.timestamp),
                    _ => None,
                },
            }),
        }
    }
}
