//! Market data models
//!
//! This module contains the data types exchanged with callers and collaborators:
//! - `query` - The request (Query) and its closed data type tag (DataType)
//! - `quote` - Provider output (RawQuote) and the normalized unit (DatedScalar)
//! - `surface` - Option leg view handed to surface builders and the resulting surface
//! - `payload` - The successful result of a dispatched query

mod payload;
mod query;
mod quote;
mod surface;

pub use payload::Payload;
pub use query::{DataType, Query, CLOSE_FIELD};
pub use quote::{DatedScalar, RawQuote};
pub use surface::{OptionPriceSurface, OptionQuoteView, SurfacePoint};
