//! Option price surface construction.
//!
//! The engine treats surface construction as a collaborator behind
//! [`SurfaceBuilder`]. [`GridSurfaceBuilder`] is the default: it places each
//! leg on a (maturity, strike) grid without any interpolation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{OptionPriceSurface, OptionQuoteView, SurfacePoint};

/// Failure reported by a surface builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SurfaceBuildError {
    pub message: String,
}

impl SurfaceBuildError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Builds an option price surface from a flat list of legs.
pub trait SurfaceBuilder: Send + Sync {
    fn build(
        &self,
        underlying: &str,
        as_of: NaiveDate,
        quotes: &[OptionQuoteView],
    ) -> Result<OptionPriceSurface, SurfaceBuildError>;
}

/// Places legs on a maturity/strike grid.
///
/// Every leg must carry a strike and a maturity and a non-negative price.
/// An empty chain produces an empty surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridSurfaceBuilder;

impl SurfaceBuilder for GridSurfaceBuilder {
    fn build(
        &self,
        underlying: &str,
        as_of: NaiveDate,
        quotes: &[OptionQuoteView],
    ) -> Result<OptionPriceSurface, SurfaceBuildError> {
        let mut points = Vec::with_capacity(quotes.len());

        for (index, quote) in quotes.iter().enumerate() {
            let label = quote
                .contract_code
                .clone()
                .unwrap_or_else(|| format!("#{}", index));

            let strike = quote
                .strike
                .ok_or_else(|| SurfaceBuildError::new(format!("Option leg {} has no strike", label)))?;
            let maturity = quote
                .maturity
                .ok_or_else(|| SurfaceBuildError::new(format!("Option leg {} has no maturity", label)))?;

            if quote.settlement_value < Decimal::ZERO {
                return Err(SurfaceBuildError::new(format!(
                    "Option leg {} has negative price {}",
                    label, quote.settlement_value
                )));
            }

            points.push(SurfacePoint {
                maturity,
                strike,
                contract_code: quote.contract_code.clone(),
                price: quote.settlement_value,
            });
        }

        points.sort_by(|a, b| {
            a.maturity
                .cmp(&b.maturity)
                .then(a.strike.cmp(&b.strike))
                .then_with(|| a.contract_code.cmp(&b.contract_code))
        });

        let mut maturities: Vec<NaiveDate> = points.iter().map(|p| p.maturity).collect();
        maturities.dedup();

        let mut strikes: Vec<Decimal> = points.iter().map(|p| p.strike).collect();
        strikes.sort();
        strikes.dedup();

        Ok(OptionPriceSurface {
            underlying: underlying.to_string(),
            as_of,
            maturities,
            strikes,
            points,
        })
    }
}
