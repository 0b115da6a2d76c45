use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::QueryError;

/// The only field the engine serves.
pub const CLOSE_FIELD: &str = "close";

/// Kind of dataset a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// One dated value on the query date
    #[default]
    Scalar,
    /// Dated values over `[date, end_date]`
    TimeSeries,
    /// Option price surface built from the chain listed on the query date
    OptionChain,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::TimeSeries => "TIME_SERIES",
            Self::OptionChain => "OPTION_CHAIN",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = QueryError;

    /// Parse a host-supplied tag. Separators and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "scalar" | "point" | "quote" => Ok(Self::Scalar),
            "timeseries" | "series" => Ok(Self::TimeSeries),
            "optionchain" | "options" => Ok(Self::OptionChain),
            _ => Err(QueryError::UnsupportedDataType(s.to_string())),
        }
    }
}

/// A market data request. Identifies exactly one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub ticker: String,
    pub field: String,
    pub data_type: DataType,
    pub date: NaiveDate,
    /// Range end, only read by [`DataType::TimeSeries`] queries
    pub end_date: NaiveDate,
}

impl Query {
    /// Closing value of `ticker` on `date`.
    pub fn scalar(ticker: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            ticker: ticker.into(),
            field: CLOSE_FIELD.to_string(),
            data_type: DataType::Scalar,
            date,
            end_date: date,
        }
    }

    /// Closing values of `ticker` over `[start, end]`.
    pub fn time_series(ticker: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            ticker: ticker.into(),
            field: CLOSE_FIELD.to_string(),
            data_type: DataType::TimeSeries,
            date: start,
            end_date: end,
        }
    }

    /// Option price surface for `ticker` as listed on `date`.
    pub fn option_chain(ticker: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            ticker: ticker.into(),
            field: CLOSE_FIELD.to_string(),
            data_type: DataType::OptionChain,
            date,
            end_date: date,
        }
    }

    /// Build a query from host-supplied parts, parsing the data type tag.
    pub fn parse(
        ticker: impl Into<String>,
        field: impl Into<String>,
        data_type: &str,
        date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            ticker: ticker.into(),
            field: field.into(),
            data_type: data_type.parse()?,
            date,
            end_date: end_date.unwrap_or(date),
        })
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}
