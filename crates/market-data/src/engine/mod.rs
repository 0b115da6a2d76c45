//! Query translation and normalization.
//!
//! ```text
//!   dispatch(Query)
//!        |
//!        +-- Scalar ------> single_point --> time_series --+
//!        +-- TimeSeries --------------------> time_series --+--> QuoteSource
//!        +-- OptionChain -> option_chain ------------------+
//!                                |
//!                                +--> SurfaceBuilder
//! ```
//!
//! Every operation is a single attempt: no retries, no caching, no state
//! kept between calls. Collaborator failures come back as [`QueryError`]s.
//!
//! [`QueryError`]: crate::errors::QueryError

mod dispatcher;
mod option_chain;
mod single_point;
mod time_series;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use crate::provider::QuoteSource;
use crate::resolver::{PassthroughPreparser, SymbolPreparser};
use crate::surface::{GridSurfaceBuilder, SurfaceBuilder};

/// Entry point for market data queries.
///
/// Cheap to share: all collaborators are held behind `Arc`, and no call
/// mutates the engine.
pub struct QueryEngine {
    source: Arc<dyn QuoteSource>,
    preparser: Arc<dyn SymbolPreparser>,
    surface_builder: Arc<dyn SurfaceBuilder>,
}

impl QueryEngine {
    pub fn new(
        source: Arc<dyn QuoteSource>,
        preparser: Arc<dyn SymbolPreparser>,
        surface_builder: Arc<dyn SurfaceBuilder>,
    ) -> Self {
        Self {
            source,
            preparser,
            surface_builder,
        }
    }

    /// Engine with tickers sent as typed and the grid surface builder.
    pub fn with_source(source: Arc<dyn QuoteSource>) -> Self {
        Self::new(
            source,
            Arc::new(PassthroughPreparser),
            Arc::new(GridSurfaceBuilder),
        )
    }

    /// Identifier of the quote source behind this engine.
    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }
}
