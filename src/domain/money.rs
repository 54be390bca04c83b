//! Monetary types for price and volume representation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Volume represented as a Decimal for precision.
pub type Volume = Decimal;

/// Price substituted for a missing or malformed outcome quote.
pub const NEUTRAL_PRICE: Price = dec!(0.5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_price_is_one_half() {
        assert_eq!(NEUTRAL_PRICE, dec!(0.5));
    }
}
