//! Price list shared by the order and quote operations.

/// Listed selections and their unit price.
///
/// Selections are matched exactly; there is no normalization.
pub const PRICE_LIST: &[(&str, f64)] = &[("beer as string", 5.95), ("many", 50.0)];

/// Price charged for selections missing from the list.
pub const UNLISTED_PRICE: f64 = 0.0;

/// Unit price of `selection`, if it is listed.
pub fn price_of(selection: &str) -> Option<f64> {
    PRICE_LIST
        .iter()
        .find(|(name, _)| *name == selection)
        .map(|(_, price)| *price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_prices() {
        assert_eq!(price_of("beer as string"), Some(5.95));
        assert_eq!(price_of("many"), Some(50.0));
    }

    #[test]
    fn test_unlisted_selection() {
        assert_eq!(price_of("beer"), None);
        assert_eq!(price_of("Many"), None);
        assert_eq!(price_of(""), None);
    }
}
