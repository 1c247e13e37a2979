// ============================================================================
// Magnitude Arithmetic
// Comparison and ripple add/subtract over unsigned decimal strings
// ============================================================================
//
// Both operands are first aligned into one digit buffer each: integer parts
// left-padded and fractional parts right-padded to a common width, with the
// point position tracked as a scale. A single right-to-left pass then adds or
// subtracts across the whole buffer, so a carry or borrow out of the fraction
// flows into the integer digits like any other column.

use super::normalize::{canonical_magnitude, split_number, strip_leading_zeros};
use std::cmp::Ordering;
use std::iter;

/// Two magnitudes padded to identical shape.
///
/// Digits are stored most significant first as values `0..=9`; the last
/// `scale` digits are fractional.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AlignedDigits {
    lhs: Vec<u8>,
    rhs: Vec<u8>,
    scale: usize,
}

impl AlignedDigits {
    fn new(a: &str, b: &str) -> Self {
        let (a_int, a_frac) = split_number(a);
        let (b_int, b_frac) = split_number(b);

        let int_width = a_int.len().max(b_int.len());
        let scale = a_frac.len().max(b_frac.len());

        Self {
            lhs: pad_digits(a_int, a_frac, int_width, scale),
            rhs: pad_digits(b_int, b_frac, int_width, scale),
            scale,
        }
    }

    /// Column-wise sum with carry. The result is one digit wider than the
    /// operands to hold the final carry.
    fn ripple_add(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.lhs.len() + 1];
        let mut carry = 0u8;

        for (i, (l, r)) in self.lhs.iter().zip(&self.rhs).enumerate().rev() {
            let sum = l + r + carry;
            out[i + 1] = sum % 10;
            carry = sum / 10;
        }
        out[0] = carry;
        out
    }

    /// Column-wise difference with borrow. Requires `lhs >= rhs`.
    fn ripple_sub(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.lhs.len()];
        let mut borrow = 0u8;

        for (i, (l, r)) in self.lhs.iter().zip(&self.rhs).enumerate().rev() {
            let subtrahend = r + borrow;
            if *l >= subtrahend {
                out[i] = l - subtrahend;
                borrow = 0;
            } else {
                out[i] = l + 10 - subtrahend;
                borrow = 1;
            }
        }
        debug_assert_eq!(borrow, 0, "ripple_sub underflowed: lhs < rhs");
        out
    }
}

fn pad_digits(int_part: &str, frac_part: &str, int_width: usize, scale: usize) -> Vec<u8> {
    iter::repeat(0)
        .take(int_width - int_part.len())
        .chain(int_part.bytes().map(|b| b - b'0'))
        .chain(frac_part.bytes().map(|b| b - b'0'))
        .chain(iter::repeat(0).take(scale - frac_part.len()))
        .collect()
}

/// Re-insert the point `scale` digits from the right and normalize.
fn render(digits: &[u8], scale: usize) -> String {
    let point_at = digits.len() - scale;
    let mut out = String::with_capacity(digits.len() + 1);
    for (i, d) in digits.iter().enumerate() {
        if i == point_at && scale > 0 {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    canonical_magnitude(&out)
}

/// Compare two unsigned magnitudes numerically without parsing them.
///
/// Integer parts are compared by length once leading zeros are gone, then
/// digit by digit; equal integer parts fall through to the fractional parts,
/// right-padded with zeros to a common width.
pub fn compare_magnitude(a: &str, b: &str) -> Ordering {
    let (a_int, a_frac) = split_number(a);
    let (b_int, b_frac) = split_number(b);
    let a_int = strip_leading_zeros(a_int);
    let b_int = strip_leading_zeros(b_int);

    a_int
        .len()
        .cmp(&b_int.len())
        .then_with(|| a_int.cmp(b_int))
        .then_with(|| {
            let width = a_frac.len().max(b_frac.len());
            let padded = |frac: &str| {
                frac.bytes()
                    .chain(iter::repeat(b'0'))
                    .take(width)
                    .collect::<Vec<u8>>()
            };
            padded(a_frac).cmp(&padded(b_frac))
        })
}

/// Sum of two unsigned magnitudes, in canonical form.
///
/// # Example
/// ```
/// use decimal_adder::numeric::add_magnitudes;
///
/// assert_eq!(add_magnitudes("0.999", "0.001"), "1");
/// assert_eq!(add_magnitudes("100.1", "99.9"), "200");
/// ```
pub fn add_magnitudes(a: &str, b: &str) -> String {
    let aligned = AlignedDigits::new(a, b);
    render(&aligned.ripple_add(), aligned.scale)
}

/// Difference `larger - smaller` of two unsigned magnitudes, in canonical form.
///
/// The caller must order the operands so that `larger >= smaller`; use
/// [`compare_magnitude`] first. An all-zero difference renders as `"0"`.
pub fn subtract_magnitudes(larger: &str, smaller: &str) -> String {
    debug_assert!(
        compare_magnitude(larger, smaller) != Ordering::Less,
        "subtract_magnitudes called with {:?} < {:?}",
        larger,
        smaller
    );
    let aligned = AlignedDigits::new(larger, smaller);
    render(&aligned.ripple_sub(), aligned.scale)
}
