//! Exact decimal arithmetic over string-encoded balances.
//!
//! CRITICAL: Never use floating-point for accounting totals.
//! The host reports balances as decimal strings; every operation here parses
//! them into `rust_decimal::Decimal`, computes exactly and renders the result
//! back in normalized form (`-0` becomes `0`, trailing zeros are stripped).
//!
//! An empty or blank operand is read as zero, which is how the host reports a
//! group without movements.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors raised by the decimal arithmetic service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The operand is not a valid decimal string.
    #[error("Malformed decimal: {0:?}")]
    MalformedDecimal(String),

    /// The result does not fit the 96-bit mantissa.
    #[error("Decimal overflow")]
    Overflow,
}

/// Parses a decimal string. Blank input is zero.
pub fn parse(raw: &str) -> Result<Decimal, DecimalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(trimmed).map_err(|_| DecimalError::MalformedDecimal(raw.to_string()))
}

/// Renders a decimal in the normalized string form used at the host boundary.
#[must_use]
pub fn render(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Renders a decimal rounded half away from zero to exactly `dp` places.
#[must_use]
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dp);
    rounded.to_string()
}

/// Adds two decimals, failing on overflow.
pub fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal, DecimalError> {
    a.checked_add(b).ok_or(DecimalError::Overflow)
}

/// Subtracts `b` from `a`, failing on overflow.
pub fn checked_sub(a: Decimal, b: Decimal) -> Result<Decimal, DecimalError> {
    a.checked_sub(b).ok_or(DecimalError::Overflow)
}

/// `a + b` over decimal strings.
pub fn add(a: &str, b: &str) -> Result<String, DecimalError> {
    checked_add(parse(a)?, parse(b)?).map(render)
}

/// `a - b` over decimal strings.
pub fn subtract(a: &str, b: &str) -> Result<String, DecimalError> {
    checked_sub(parse(a)?, parse(b)?).map(render)
}

/// `-a` over a decimal string.
pub fn invert(a: &str) -> Result<String, DecimalError> {
    parse(a).map(|value| render(-value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1.50", "2.50", "4")]
    #[case("-10", "10", "0")]
    #[case("", "3.25", "3.25")]
    #[case("  7 ", "0.001", "7.001")]
    #[case("123456789.123456789", "0.000000001", "123456789.12345679")]
    fn test_add(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(add(a, b).unwrap(), expected);
    }

    #[rstest]
    #[case("10", "2.5", "7.5")]
    #[case("0", "0", "0")]
    #[case("-1", "-1", "0")]
    #[case("", "", "0")]
    fn test_subtract(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
        assert_eq!(subtract(a, b).unwrap(), expected);
    }

    #[test]
    fn test_invert_zero_is_not_negative() {
        assert_eq!(invert("0").unwrap(), "0");
        assert_eq!(invert("").unwrap(), "0");
        assert_eq!(invert("0.00").unwrap(), "0");
    }

    #[test]
    fn test_invert_flips_sign() {
        assert_eq!(invert("12.30").unwrap(), "-12.3");
        assert_eq!(invert("-4").unwrap(), "4");
    }

    #[rstest]
    #[case("abc")]
    #[case("1.2.3")]
    #[case("12..5")]
    #[case("--3")]
    fn test_malformed_operand(#[case] raw: &str) {
        assert_eq!(
            add(raw, "1"),
            Err(DecimalError::MalformedDecimal(raw.to_string()))
        );
        assert_eq!(
            invert(raw),
            Err(DecimalError::MalformedDecimal(raw.to_string()))
        );
    }

    #[rstest]
    #[case(dec!(1234.5), 2, "1234.50")]
    #[case(dec!(1234.565), 2, "1234.57")]
    #[case(dec!(-1234.565), 2, "-1234.57")]
    #[case(dec!(1234.5), 0, "1235")]
    #[case(dec!(-0.4), 0, "0")]
    #[case(dec!(0), 2, "0.00")]
    fn test_format_fixed(#[case] value: Decimal, #[case] dp: u32, #[case] expected: &str) {
        assert_eq!(format_fixed(value, dp), expected);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(checked_add(Decimal::MAX, dec!(1)), Err(DecimalError::Overflow));
        assert_eq!(checked_sub(Decimal::MIN, dec!(1)), Err(DecimalError::Overflow));
    }

    /// Strategy for amounts with up to 4 decimal places.
    fn amount() -> impl Strategy<Value = Decimal> {
        (-100_000_000_000i64..100_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Subtracting what was added gives back the original amount.
        #[test]
        fn prop_add_subtract_inverse(a in amount(), b in amount()) {
            let a_str = a.to_string();
            let sum = add(&a_str, &b.to_string()).unwrap();
            let back = subtract(&sum, &b.to_string()).unwrap();
            prop_assert_eq!(back, render(a));
        }

        /// Inverting twice is the identity.
        #[test]
        fn prop_invert_involution(a in amount()) {
            let twice = invert(&invert(&a.to_string()).unwrap()).unwrap();
            prop_assert_eq!(twice, render(a));
        }

        /// Chained additions do not drift.
        #[test]
        fn prop_chained_additions_exact(values in prop::collection::vec(amount(), 1..40)) {
            let mut running = String::new();
            for value in &values {
                running = add(&running, &value.to_string()).unwrap();
            }
            let expected: Decimal = values.iter().copied().sum();
            prop_assert_eq!(running, render(expected));
        }
    }
}
