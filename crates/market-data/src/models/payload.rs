use serde::{Deserialize, Serialize};

use super::quote::DatedScalar;
use super::surface::OptionPriceSurface;

/// Successful result of a dispatched query. Exactly one shape per query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Payload {
    Point(DatedScalar),
    Series(Vec<DatedScalar>),
    Surface(OptionPriceSurface),
}

impl Payload {
    pub fn as_point(&self) -> Option<&DatedScalar> {
        match self {
            Self::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_series(&self) -> Option<&[DatedScalar]> {
        match self {
            Self::Series(series) => Some(series),
            _ => None,
        }
    }

    pub fn as_surface(&self) -> Option<&OptionPriceSurface> {
        match self {
            Self::Surface(surface) => Some(surface),
            _ => None,
        }
    }
}
