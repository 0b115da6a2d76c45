//! Yahoo exchange suffix whitelist.

/// Known Yahoo exchange suffixes.
///
/// Single-letter share classes such as `.A`/`.B` are deliberately absent so
/// that `BRK.B` is not mistaken for a listing suffix.
pub const YAHOO_EXCHANGE_SUFFIXES: &[&str] = &[
    // Europe
    ".MC", ".L", ".IL", ".PA", ".DE", ".F", ".MU", ".SG", ".DU", ".HM", ".BE", ".AS",
    ".BR", ".LS", ".MI", ".SW", ".VI", ".ST", ".OL", ".CO", ".HE", ".IC", ".IR", ".AT",
    ".WA", ".PR", ".BD",
    // Americas
    ".TO", ".V", ".NE", ".CN", ".SA", ".MX", ".BA", ".SN",
    // Asia-Pacific
    ".T", ".HK", ".SS", ".SZ", ".KS", ".KQ", ".TW", ".TWO", ".SI", ".AX", ".NZ", ".NS",
    ".BO", ".JK", ".KL", ".BK",
    // Middle East & Africa
    ".TA", ".JO", ".SR", ".QA",
];

/// Whether `symbol` (uppercase) already ends with a known exchange suffix.
pub fn has_yahoo_exchange_suffix(symbol: &str) -> bool {
    YAHOO_EXCHANGE_SUFFIXES
        .iter()
        .any(|suffix| symbol.len() > suffix.len() && symbol.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_suffixes() {
        assert!(has_yahoo_exchange_suffix("GRF.MC"));
        assert!(has_yahoo_exchange_suffix("SHOP.TO"));
        assert!(has_yahoo_exchange_suffix("7203.T"));
        assert!(has_yahoo_exchange_suffix("VOD.L"));
    }

    #[test]
    fn test_share_classes_are_not_suffixes() {
        assert!(!has_yahoo_exchange_suffix("BRK.B"));
        assert!(!has_yahoo_exchange_suffix("RDS.A"));
        assert!(!has_yahoo_exchange_suffix("AAPL"));
    }

    #[test]
    fn test_bare_suffix_is_not_a_symbol() {
        assert!(!has_yahoo_exchange_suffix(".MC"));
    }
}
