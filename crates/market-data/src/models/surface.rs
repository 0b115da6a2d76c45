use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote::RawQuote;

/// The part of an option leg a surface builder reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionQuoteView {
    pub contract_code: Option<String>,
    pub strike: Option<Decimal>,
    pub maturity: Option<NaiveDate>,
    pub settlement_value: Decimal,
}

impl From<&RawQuote> for OptionQuoteView {
    fn from(quote: &RawQuote) -> Self {
        Self {
            contract_code: quote.contract_code.clone(),
            strike: quote.strike_price,
            maturity: quote.maturity_date,
            settlement_value: quote.settlement_value,
        }
    }
}

/// One priced contract on the surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfacePoint {
    pub maturity: NaiveDate,
    pub strike: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_code: Option<String>,
    pub price: Decimal,
}

/// Option prices indexed by maturity and strike.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPriceSurface {
    /// Underlying symbol as sent to the provider
    pub underlying: String,
    /// Date the chain was listed on
    pub as_of: NaiveDate,
    /// Distinct maturities, ascending
    pub maturities: Vec<NaiveDate>,
    /// Distinct strikes, ascending
    pub strikes: Vec<Decimal>,
    /// Sorted by (maturity, strike, contract code)
    pub points: Vec<SurfacePoint>,
}

impl OptionPriceSurface {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Prices quoted at the given node.
    pub fn prices_at(&self, maturity: NaiveDate, strike: Decimal) -> impl Iterator<Item = &SurfacePoint> {
        self.points
            .iter()
            .filter(move |p| p.maturity == maturity && p.strike == strike)
    }

    /// The slice of the surface for one maturity.
    pub fn smile(&self, maturity: NaiveDate) -> Vec<&SurfacePoint> {
        self.points.iter().filter(|p| p.maturity == maturity).collect()
    }
}
