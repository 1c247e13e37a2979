// ============================================================================
// Sign-Aware Adder
// Top-level entry point: signed addition of decimal literals
// ============================================================================

use super::errors::NumericResult;
use super::magnitude::{add_magnitudes, compare_magnitude, subtract_magnitudes};
use super::normalize::{canonicalize, split_sign, with_sign};
use super::validator::validate;
use std::cmp::Ordering;

/// Add two valid decimal literals and return the canonical sum.
///
/// Both inputs must already pass [`is_valid_decimal`](super::is_valid_decimal);
/// use [`checked_add_strings`] when that is not guaranteed.
///
/// Equal signs add magnitudes and keep the shared sign. Different signs
/// subtract the smaller magnitude from the larger and take the sign of the
/// larger operand. Zero is never signed.
///
/// # Example
/// ```
/// use decimal_adder::numeric::add_strings;
///
/// assert_eq!(add_strings("1.5", "2.3"), "3.8");
/// assert_eq!(add_strings("-1.5", "2.3"), "0.8");
/// assert_eq!(add_strings("-3.25", "-1.75"), "-5");
/// ```
pub fn add_strings(a: &str, b: &str) -> String {
    let (a_negative, a_magnitude) = split_sign(a);
    let (b_negative, b_magnitude) = split_sign(b);

    let sum = if a_negative == b_negative {
        with_sign(a_negative, add_magnitudes(a_magnitude, b_magnitude))
    } else {
        match compare_magnitude(a_magnitude, b_magnitude) {
            Ordering::Equal => "0".to_string(),
            Ordering::Greater => {
                with_sign(a_negative, subtract_magnitudes(a_magnitude, b_magnitude))
            },
            Ordering::Less => with_sign(b_negative, subtract_magnitudes(b_magnitude, a_magnitude)),
        }
    };

    tracing::trace!(lhs = a, rhs = b, sum = %sum, "added decimal literals");
    sum
}

/// Validate both operands, then add them.
///
/// # Errors
/// Returns `InvalidLiteral` for the first operand that fails validation,
/// checking `a` before `b`.
pub fn checked_add_strings(a: &str, b: &str) -> NumericResult<String> {
    validate(a)?;
    validate(b)?;
    Ok(add_strings(a, b))
}

/// Flip the sign of a valid literal. The result is canonical, so negating
/// zero gives `"0"`.
pub fn negate(literal: &str) -> String {
    let (negative, magnitude) = split_sign(literal);
    canonicalize(&if negative {
        magnitude.to_string()
    } else {
        format!("-{}", magnitude)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::errors::{LiteralError, NumericError};
    use crate::numeric::normalize::is_canonical;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_end_to_end_examples() {
        assert_eq!(add_strings("1.5", "2.3"), "3.8");
        assert_eq!(add_strings("-1.5", "2.3"), "0.8");
        assert_eq!(add_strings("10", "-10"), "0");
        assert_eq!(add_strings("0.999", "0.001"), "1");
        assert_eq!(add_strings("-3.25", "-1.75"), "-5");
        assert_eq!(add_strings("100.1", "99.9"), "200");
    }

    #[test]
    fn test_mixed_signs() {
        assert_eq!(add_strings("1.5", "-2.3"), "-0.8");
        assert_eq!(add_strings("+5", "-0.25"), "4.75");
        assert_eq!(add_strings("-5", "+0.25"), "-4.75");
        assert_eq!(add_strings("-0.5", "0.50"), "0");
    }

    #[test]
    fn test_zero_is_never_signed() {
        assert_eq!(add_strings("-0", "-0"), "0");
        assert_eq!(add_strings("-0.0", "0"), "0");
        assert_eq!(add_strings("-0.000", "-00"), "0");
    }

    #[test]
    fn test_leading_and_trailing_zero_inputs() {
        assert_eq!(add_strings("007.50", "0002.50"), "10");
        assert_eq!(add_strings("0.3", "0.5"), "0.8");
        assert_eq!(add_strings("+0.10", "0.020"), "0.12");
    }

    #[test]
    fn test_beyond_native_precision() {
        let a = "123456789012345678901234567890.123456789012345678901234567890";
        let b = "0.000000000000000000000000000010";
        assert_eq!(
            add_strings(a, b),
            "123456789012345678901234567890.1234567890123456789012345679"
        );
        assert_eq!(add_strings("0.1", "0.2"), "0.3");
    }

    #[test]
    fn test_checked_add_strings() {
        assert_eq!(checked_add_strings("1", "2"), Ok("3".to_string()));
        assert_eq!(
            checked_add_strings(".5", "x"),
            Err(NumericError::InvalidLiteral {
                literal: ".5".to_string(),
                reason: LiteralError::MissingIntegerDigits,
            })
        );
        assert!(matches!(
            checked_add_strings("1", "5."),
            Err(NumericError::InvalidLiteral { ref literal, .. }) if literal == "5."
        ));
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate("1.50"), "-1.5");
        assert_eq!(negate("-2"), "2");
        assert_eq!(negate("+3"), "-3");
        assert_eq!(negate("0.0"), "0");
    }

    fn literal() -> impl Strategy<Value = String> {
        "[+-]?[0-9]{1,25}(\\.[0-9]{1,25})?"
    }

    fn small_literal() -> impl Strategy<Value = String> {
        "-?[0-9]{1,12}(\\.[0-9]{1,12})?"
    }

    proptest! {
        #[test]
        fn prop_commutative(a in literal(), b in literal()) {
            prop_assert_eq!(add_strings(&a, &b), add_strings(&b, &a));
        }

        #[test]
        fn prop_zero_is_identity(a in literal()) {
            prop_assert_eq!(add_strings(&a, "0"), canonicalize(&a));
        }

        #[test]
        fn prop_additive_inverse(a in literal()) {
            prop_assert_eq!(add_strings(&a, &negate(&a)), "0");
        }

        #[test]
        fn prop_no_artifacts(a in literal(), b in literal()) {
            let sum = add_strings(&a, &b);
            prop_assert!(is_canonical(&sum), "{} + {} = {}", a, b, sum);
            prop_assert_ne!(sum.as_str(), "-0");
        }

        #[test]
        fn prop_associative(a in literal(), b in literal(), c in literal()) {
            prop_assert_eq!(
                add_strings(&add_strings(&a, &b), &c),
                add_strings(&a, &add_strings(&b, &c))
            );
        }

        #[test]
        fn prop_agrees_with_rust_decimal(a in small_literal(), b in small_literal()) {
            let expected = (Decimal::from_str(&a).unwrap() + Decimal::from_str(&b).unwrap())
                .normalize()
                .to_string();
            prop_assert_eq!(add_strings(&a, &b), canonicalize(&expected));
        }
    }
}
