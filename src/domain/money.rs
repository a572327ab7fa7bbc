//! Monetary amounts.
//!
//! All amounts are HBAR values held as [`rust_decimal::Decimal`] so that
//! balance arithmetic is exact. The mirror node reports balances in
//! tinybars (1 HBAR = 100,000,000 tinybars).

use rust_decimal::Decimal;

/// An HBAR amount.
pub type Amount = Decimal;

/// Convert a tinybar balance reported by the mirror node into HBAR.
pub fn hbar_from_tinybars(tinybars: i64) -> Amount {
    Decimal::new(tinybars, 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_hbar_is_one_hundred_million_tinybars() {
        assert_eq!(hbar_from_tinybars(100_000_000), dec!(1));
    }

    #[test]
    fn test_fractional_amounts_are_exact() {
        assert_eq!(hbar_from_tinybars(1), dec!(0.00000001));
        assert_eq!(hbar_from_tinybars(123_456_789), dec!(1.23456789));
    }

    #[test]
    fn test_zero_tinybars() {
        assert_eq!(hbar_from_tinybars(0), Amount::ZERO);
    }
}
