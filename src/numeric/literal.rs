// ============================================================================
// Decimal Literal
// Validated, canonical arbitrary-precision decimal value
// ============================================================================

use super::adder::{add_strings, negate};
use super::errors::{NumericError, NumericResult};
use super::magnitude::compare_magnitude;
use super::normalize::{canonicalize, split_sign};
use super::validator::validate;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Arbitrary-precision decimal number stored as its canonical string.
///
/// Construction goes through the validator, so every value is a plain
/// signed decimal literal in canonical form: no redundant zeros, no bare
/// point and never `"-0"`. Because canonical form is unique, string equality
/// is numeric equality.
///
/// # Example
/// ```
/// use decimal_adder::numeric::DecimalLiteral;
///
/// let a: DecimalLiteral = "0.1".parse()?;
/// let b: DecimalLiteral = "0.2".parse()?;
/// assert_eq!((a + b).to_string(), "0.3");
/// # Ok::<(), decimal_adder::numeric::NumericError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalLiteral(String);

impl DecimalLiteral {
    // Zero is held as the empty string so that it can be a constant.
    /// Zero value
    pub const ZERO: Self = Self(String::new());

    /// One (1)
    pub fn one() -> Self {
        Self("1".to_string())
    }

    /// Parse and canonicalize a literal.
    ///
    /// # Errors
    /// Returns `InvalidLiteral` if `s` is not a plain signed decimal literal.
    pub fn parse_literal(s: &str) -> NumericResult<Self> {
        validate(s)?;
        Ok(Self::from_canonical(canonicalize(s)))
    }

    /// Wrap a string that is already canonical.
    fn from_canonical(canonical: String) -> Self {
        if canonical == "0" {
            Self::ZERO
        } else {
            Self(canonical)
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        if self.0.is_empty() {
            "0"
        } else {
            &self.0
        }
    }

    /// Integer digits of the magnitude (no sign).
    pub fn integer_digits(&self) -> &str {
        let (_, magnitude) = split_sign(self.as_str());
        magnitude.split_once('.').map_or(magnitude, |(int, _)| int)
    }

    /// Fractional digits of the magnitude; empty for whole numbers.
    pub fn fraction_digits(&self) -> &str {
        self.as_str().split_once('.').map_or("", |(_, frac)| frac)
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> usize {
        self.fraction_digits().len()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Get absolute value.
    pub fn abs(&self) -> Self {
        match self.0.strip_prefix('-') {
            Some(magnitude) => Self(magnitude.to_string()),
            None => self.clone(),
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition. Never overflows.
    pub fn add_exact(&self, rhs: &Self) -> Self {
        Self::from_canonical(add_strings(self.as_str(), rhs.as_str()))
    }

    /// Exact subtraction, computed as `self + (-rhs)`.
    pub fn sub_exact(&self, rhs: &Self) -> Self {
        self.add_exact(&-rhs)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalLiteral {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for DecimalLiteral {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalLiteral {
    fn cmp(&self, other: &Self) -> Ordering {
        self.signum().cmp(&other.signum()).then_with(|| {
            let (_, lhs) = split_sign(self.as_str());
            let (_, rhs) = split_sign(other.as_str());
            let by_magnitude = compare_magnitude(lhs, rhs);
            if self.is_negative() {
                by_magnitude.reverse()
            } else {
                by_magnitude
            }
        })
    }
}

impl Neg for DecimalLiteral {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &DecimalLiteral {
    type Output = DecimalLiteral;

    fn neg(self) -> Self::Output {
        DecimalLiteral::from_canonical(negate(self.as_str()))
    }
}

impl Add for DecimalLiteral {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.add_exact(&rhs)
    }
}

impl<'a> Add<&'a DecimalLiteral> for &'a DecimalLiteral {
    type Output = DecimalLiteral;

    #[inline]
    fn add(self, rhs: &'a DecimalLiteral) -> Self::Output {
        self.add_exact(rhs)
    }
}

impl Sub for DecimalLiteral {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_exact(&rhs)
    }
}

impl<'a> Sub<&'a DecimalLiteral> for &'a DecimalLiteral {
    type Output = DecimalLiteral;

    #[inline]
    fn sub(self, rhs: &'a DecimalLiteral) -> Self::Output {
        self.sub_exact(rhs)
    }
}

impl Sum for DecimalLiteral {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.add_exact(&x))
    }
}

impl<'a> Sum<&'a DecimalLiteral> for DecimalLiteral {
    fn sum<I: Iterator<Item = &'a DecimalLiteral>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.add_exact(x))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalLiteral({})", self.as_str())
    }
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl AsRef<str> for DecimalLiteral {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DecimalLiteral {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "+0123.4500" -> 123.45
    /// - "-0.000" -> 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl TryFrom<&str> for DecimalLiteral {
    type Error = NumericError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse_literal(s)
    }
}

impl From<i64> for DecimalLiteral {
    fn from(value: i64) -> Self {
        Self::from_canonical(value.to_string())
    }
}

impl From<u64> for DecimalLiteral {
    fn from(value: u64) -> Self {
        Self::from_canonical(value.to_string())
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for DecimalLiteral {
    /// Exact conversion; every `Decimal` is a finite plain decimal.
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::from_canonical(canonicalize(&d.to_string()))
    }
}

impl DecimalLiteral {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `Overflow` if the integer part exceeds the 96-bit mantissa
    /// - `PrecisionLoss` if the value needs more fractional digits than
    ///   `Decimal` can hold
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        use rust_decimal::Decimal;

        Decimal::from_str_exact(self.as_str()).map_err(|_| {
            if Decimal::from_str_exact(self.integer_digits()).is_err() {
                NumericError::Overflow
            } else {
                NumericError::PrecisionLoss
            }
        })
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalLiteral {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalLiteral {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
