// ============================================================================
// Normalizer
// Pure string transforms that bring literals into canonical form
// ============================================================================

/// Split an unsigned literal on its decimal point.
///
/// Returns `(integer_part, fractional_part)`; the fractional part is empty
/// when there is no point.
#[inline]
pub fn split_number(literal: &str) -> (&str, &str) {
    literal.split_once('.').unwrap_or((literal, ""))
}

/// Remove leading `'0'` digits, always keeping at least one character.
///
/// `"000"` becomes `"0"`, `"0042"` becomes `"42"`. Expects a digit run
/// (no sign, no point).
#[inline]
pub fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}

/// Remove trailing zeros after a decimal point, then a bare trailing point.
///
/// Strings without a point are returned unchanged. If nothing is left the
/// result is `"0"`.
#[inline]
pub fn strip_trailing_zeros(literal: &str) -> &str {
    if !literal.contains('.') {
        return literal;
    }
    let trimmed = literal.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Split a literal into its sign and unsigned magnitude.
///
/// Returns `(is_negative, magnitude)`. A leading `+` is dropped.
#[inline]
pub fn split_sign(literal: &str) -> (bool, &str) {
    if let Some(rest) = literal.strip_prefix('-') {
        (true, rest)
    } else {
        (false, literal.strip_prefix('+').unwrap_or(literal))
    }
}

/// Bring an unsigned magnitude into canonical form.
///
/// No redundant leading zeros, no trailing fractional zeros, no bare point.
pub fn canonical_magnitude(magnitude: &str) -> String {
    let (int_part, frac_part) = split_number(magnitude);
    let int_part = strip_leading_zeros(int_part);
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        let mut out = String::with_capacity(int_part.len() + 1 + frac_part.len());
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
        out
    }
}

/// Canonical form of a valid signed literal.
///
/// The sign is kept only for strictly negative values; zero is always `"0"`.
///
/// # Example
/// ```
/// use decimal_adder::numeric::canonicalize;
///
/// assert_eq!(canonicalize("+007.2500"), "7.25");
/// assert_eq!(canonicalize("-0.000"), "0");
/// ```
pub fn canonicalize(literal: &str) -> String {
    let (negative, magnitude) = split_sign(literal);
    with_sign(negative, canonical_magnitude(magnitude))
}

/// Attach a sign to an already canonical magnitude, never producing `"-0"`.
pub(crate) fn with_sign(negative: bool, magnitude: String) -> String {
    if negative && magnitude != "0" {
        let mut out = String::with_capacity(magnitude.len() + 1);
        out.push('-');
        out.push_str(&magnitude);
        out
    } else {
        magnitude
    }
}

/// Returns `true` if `literal` is already in canonical form.
pub fn is_canonical(literal: &str) -> bool {
    canonicalize(literal) == literal && !literal.starts_with('+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_number() {
        assert_eq!(split_number("12.50"), ("12", "50"));
        assert_eq!(split_number("12"), ("12", ""));
        assert_eq!(split_number("0.5"), ("0", "5"));
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("000"), "0");
        assert_eq!(strip_leading_zeros("0"), "0");
        assert_eq!(strip_leading_zeros("0042"), "42");
        assert_eq!(strip_leading_zeros("42"), "42");
        assert_eq!(strip_leading_zeros(""), "");
    }

    #[test]
    fn test_strip_trailing_zeros() {
        assert_eq!(strip_trailing_zeros("1.500"), "1.5");
        assert_eq!(strip_trailing_zeros("1.000"), "1");
        assert_eq!(strip_trailing_zeros("100"), "100");
        assert_eq!(strip_trailing_zeros(".000"), "0");
        assert_eq!(strip_trailing_zeros("0.0"), "0");
    }

    #[test]
    fn test_transforms_are_idempotent() {
        for s in ["000", "0042", "7", "0"] {
            let once = strip_leading_zeros(s);
            assert_eq!(strip_leading_zeros(once), once);
        }
        for s in ["1.500", "1.000", "100", ".000", "20.020"] {
            let once = strip_trailing_zeros(s);
            assert_eq!(strip_trailing_zeros(once), once);
        }
        for s in ["+007.2500", "-0.0", "-12", "0.5"] {
            let once = canonicalize(s);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_split_sign() {
        assert_eq!(split_sign("-1.5"), (true, "1.5"));
        assert_eq!(split_sign("+1.5"), (false, "1.5"));
        assert_eq!(split_sign("1.5"), (false, "1.5"));
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("0.50"), "0.5");
        assert_eq!(canonicalize("000.000"), "0");
        assert_eq!(canonicalize("-0"), "0");
        assert_eq!(canonicalize("+12"), "12");
        assert_eq!(canonicalize("-0012.0100"), "-12.01");
        assert_eq!(canonicalize("100"), "100");
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("0"));
        assert!(is_canonical("-3.25"));
        assert!(!is_canonical("+3"));
        assert!(!is_canonical("03"));
        assert!(!is_canonical("3.0"));
        assert!(!is_canonical("-0"));
    }
}
