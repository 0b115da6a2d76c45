//! QuoteDesk Market Data Crate
//!
//! This crate answers market data queries (single quote, date-range time
//! series, option price surface) against a pluggable quote source and
//! normalizes the results into a small set of typed records.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |      Query       |  (ticker, field, data type, dates)
//! +------------------+
//!          |
//!          v
//! +------------------+     +--------------------+
//! |   QueryEngine    | --> |  SymbolPreparser   |  (provider-specific ticker rules)
//! +------------------+     +--------------------+
//!          |
//!          v
//! +------------------+     +--------------------+
//! |   QuoteSource    | --> |   SurfaceBuilder   |  (option chains only)
//! +------------------+     +--------------------+
//!          |
//!          v
//! +------------------+
//! |     Payload      |  (DatedScalar, series, or OptionPriceSurface)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Query`] / [`DataType`] - What the caller asks for
//! - [`RawQuote`] - What a quote source returns
//! - [`DatedScalar`] - Normalized dated value
//! - [`OptionPriceSurface`] - Option prices by maturity and strike
//! - [`Payload`] - Successful query result
//! - [`QueryError`] - Failed query result

pub mod engine;
pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod surface;

pub use engine::QueryEngine;
pub use errors::{ErrorKind, MarketDataError, QueryError};

pub use models::{
    DataType, DatedScalar, OptionPriceSurface, OptionQuoteView, Payload, Query, RawQuote,
    SurfacePoint, CLOSE_FIELD,
};

pub use provider::yahoo::{YahooConfig, YahooQuoteSource};
pub use provider::QuoteSource;

pub use resolver::{PassthroughPreparser, SymbolPreparser, YahooSymbolPreparser};

pub use surface::{GridSurfaceBuilder, SurfaceBuildError, SurfaceBuilder};
