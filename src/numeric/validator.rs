// ============================================================================
// Literal Validator
// Syntax gate for plain signed decimal literals
// ============================================================================

use super::errors::{LiteralError, NumericError, NumericResult};

/// Check a literal against `[+-]?\d+(\.\d+)?` and report the first problem.
///
/// Scanning stops at the first character that cannot appear in a literal,
/// or at a second decimal point.
pub fn validate(s: &str) -> NumericResult<()> {
    check(s).map_err(|reason| NumericError::invalid(s, reason))
}

/// Returns `true` if `s` is a syntactically valid signed decimal literal.
#[inline]
pub fn is_valid_decimal(s: &str) -> bool {
    check(s).is_ok()
}

fn check(s: &str) -> Result<(), LiteralError> {
    if s.is_empty() {
        return Err(LiteralError::Empty);
    }

    let body_start = match s.as_bytes()[0] {
        b'+' | b'-' => 1,
        _ => 0,
    };
    if body_start == s.len() {
        return Err(LiteralError::SignOnly);
    }

    let mut has_point = false;
    let mut digits_before = false;
    let mut digits_after = false;

    for (index, ch) in s.char_indices().skip(body_start) {
        match ch {
            '0'..='9' if has_point => digits_after = true,
            '0'..='9' => digits_before = true,
            '.' if has_point => return Err(LiteralError::MultiplePoints),
            '.' => has_point = true,
            _ => return Err(LiteralError::InvalidCharacter { ch, index }),
        }
    }

    if !digits_before {
        Err(LiteralError::MissingIntegerDigits)
    } else if has_point && !digits_after {
        Err(LiteralError::MissingFractionDigits)
    } else {
        Ok(())
    }
}
