//! Ticker pre-parsing.
//!
//! Hosts hand the engine tickers the way users type them ("grf", "brk.b",
//! "^ibex"). A [`SymbolPreparser`] turns those into the symbol a specific
//! quote source expects, before any request is made.

mod exchange_suffixes;

pub use exchange_suffixes::{has_yahoo_exchange_suffix, YAHOO_EXCHANGE_SUFFIXES};

/// Provider-specific ticker normalization. Pure string transform.
pub trait SymbolPreparser: Send + Sync {
    fn preparse(&self, ticker: &str) -> String;
}

/// Leaves tickers untouched apart from surrounding whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughPreparser;

impl SymbolPreparser for PassthroughPreparser {
    fn preparse(&self, ticker: &str) -> String {
        ticker.trim().to_string()
    }
}

/// Yahoo Finance symbol rules.
///
/// - Indices (`^IBEX`), FX (`EURUSD=X`) and futures (`GC=F`) pass through.
/// - Share classes use a dash on Yahoo: `BRK.B` and `BRK B` become `BRK-B`.
/// - Symbols already carrying a known exchange suffix pass through.
/// - Bare tickers get the default suffix when one is configured
///   (`GRF` with `.MC` becomes `GRF.MC`).
#[derive(Clone, Debug, Default)]
pub struct YahooSymbolPreparser {
    default_suffix: Option<String>,
}

impl YahooSymbolPreparser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `suffix` to bare tickers. A missing leading dot is added.
    pub fn with_default_suffix(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into().trim().to_uppercase();
        let default_suffix = match suffix.as_str() {
            "" => None,
            s if s.starts_with('.') => Some(suffix),
            _ => Some(format!(".{}", suffix)),
        };
        Self { default_suffix }
    }
}

impl SymbolPreparser for YahooSymbolPreparser {
    fn preparse(&self, ticker: &str) -> String {
        let symbol = ticker.trim().to_uppercase();

        if symbol.is_empty() || symbol.starts_with('^') || symbol.contains('=') {
            return symbol;
        }

        if has_yahoo_exchange_suffix(&symbol) {
            return symbol;
        }

        // Share class: "BRK.B" / "BRK B" -> "BRK-B"
        let symbol = match symbol.rsplit_once(['.', ' ']) {
            Some((base, class)) if !base.is_empty() && class.len() == 1 => {
                format!("{}-{}", base.trim_end(), class)
            }
            _ => symbol,
        };

        match &self.default_suffix {
            Some(suffix) => format!("{}{}", symbol, suffix),
            None => symbol,
        }
    }
}
