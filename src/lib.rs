// ============================================================================
// Decimal Adder Library
// Arbitrary-precision decimal addition over plain decimal strings
// ============================================================================

//! # Decimal Adder
//!
//! Exact addition of signed decimal numbers written as strings, with no
//! floating-point rounding and no upper bound on length.
//!
//! ## Features
//!
//! - **Validation** of plain decimal literals (`[+-]?\d+(\.\d+)?`)
//! - **Sign-aware addition** by digit-wise carry and borrow
//! - **Canonical output**: no redundant zeros, never `-0`
//! - **`DecimalLiteral`** value type with `+`, `-`, ordering and summation
//! - **Pair driver** that reads whitespace-separated pairs and reports sums
//!
//! ## Example
//!
//! ```rust
//! use decimal_adder::prelude::*;
//! use std::io::Cursor;
//! use std::sync::Arc;
//!
//! // Direct string arithmetic
//! assert_eq!(add_strings("0.999", "0.001"), "1");
//! assert!(!is_valid_decimal(".5"));
//!
//! // Value type
//! let total: DecimalLiteral = ["0.1", "0.2", "-0.3"]
//!     .iter()
//!     .map(|s| s.parse::<DecimalLiteral>().unwrap())
//!     .sum();
//! assert!(total.is_zero());
//!
//! // Driver over any buffered reader
//! let sink = Arc::new(CollectingSink::new());
//! let runner = PairRunner::new(sink.clone());
//! let summary = runner.run(Cursor::new("1.5 2.3\nabc 1\n")).unwrap();
//! assert_eq!(summary.summed, 1);
//! assert_eq!(sink.sums(), vec!["3.8"]);
//! ```

pub mod driver;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::driver::{DriverConfig, DriverError, PairReader, PairRunner, RunSummary};
    pub use crate::interfaces::{
        CollectingSink, LoggingSink, NoOpSink, PairEvent, ReportSink, WriterSink,
    };
    pub use crate::numeric::{
        add_strings, checked_add_strings, is_valid_decimal, DecimalLiteral, LiteralError,
        NumericError, NumericResult,
    };
}
