use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote as returned by a quote source.
///
/// Equity bars only carry a session date and a settlement value; option
/// legs also carry their contract identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    /// Trading session the quote belongs to
    pub session_date: NaiveDate,

    /// Official closing/settlement price for the session
    pub settlement_value: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<NaiveDate>,
}

impl RawQuote {
    /// Create a plain dated quote
    pub fn new(session_date: NaiveDate, settlement_value: Decimal) -> Self {
        Self {
            session_date,
            settlement_value,
            contract_code: None,
            strike_price: None,
            maturity_date: None,
        }
    }

    /// Create an option leg quote
    pub fn option_leg(
        session_date: NaiveDate,
        settlement_value: Decimal,
        contract_code: impl Into<String>,
        strike_price: Decimal,
        maturity_date: NaiveDate,
    ) -> Self {
        Self {
            session_date,
            settlement_value,
            contract_code: Some(contract_code.into()),
            strike_price: Some(strike_price),
            maturity_date: Some(maturity_date),
        }
    }
}

/// A value observed on a calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedScalar {
    pub timestamp: NaiveDate,
    pub value: Decimal,
}

impl DatedScalar {
    pub fn new(timestamp: NaiveDate, value: Decimal) -> Self {
        Self { timestamp, value }
    }
}

impl From<&RawQuote> for DatedScalar {
    fn from(quote: &RawQuote) -> Self {
        Self {
            timestamp: quote.session_date,
            value: quote.settlement_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_quote_new() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 31).unwrap();
        let quote = RawQuote::new(date, dec!(123.4));
        assert_eq!(quote.settlement_value, dec!(123.4));
        assert!(quote.contract_code.is_none());
        assert!(quote.strike_price.is_none());
        assert!(quote.maturity_date.is_none());
    }

    #[test]
    fn test_dated_scalar_takes_session_date() {
        let session = NaiveDate::from_ymd_opt(2011, 1, 28).unwrap();
        let maturity = NaiveDate::from_ymd_opt(2011, 3, 18).unwrap();
        let quote = RawQuote::option_leg(session, dec!(1.25), "GRF110318C00015000", dec!(15), maturity);

        let scalar = DatedScalar::from(&quote);
        assert_eq!(scalar.timestamp, session);
        assert_eq!(scalar.value, dec!(1.25));
    }
}
