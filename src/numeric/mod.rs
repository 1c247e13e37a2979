// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic over plain decimal strings
// ============================================================================
//
// This module provides:
// - Validator: syntax gate for signed decimal literals
// - Normalizer: canonical-form string transforms
// - Magnitude comparison and ripple add/subtract of unsigned magnitudes
// - Sign-aware addition (`add_strings`), the engine entry point
// - DecimalLiteral: validated canonical value type with operators
// - NumericError: error types at the engine boundary
//
// Design principles:
// - No floating-point operations, no numeric parsing of digit runs
// - Pure functions of their string inputs, no shared state
// - Results are always in canonical form

mod adder;
mod errors;
mod literal;
mod magnitude;
mod normalize;
mod validator;

pub use adder::{add_strings, checked_add_strings, negate};
pub use errors::{LiteralError, NumericError, NumericResult};
pub use literal::DecimalLiteral;
pub use magnitude::{add_magnitudes, compare_magnitude, subtract_magnitudes};
pub use normalize::{
    canonical_magnitude, canonicalize, is_canonical, split_number, split_sign,
    strip_leading_zeros, strip_trailing_zeros,
};
pub use validator::{is_valid_decimal, validate};
