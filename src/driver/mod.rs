// ============================================================================
// Driver Module
// Reads literal pairs from text input and reports their sums
// ============================================================================

pub mod config;
mod error;
mod pair_reader;
mod runner;

pub use config::DriverConfig;
pub use error::{DriverError, DriverResult};
pub use pair_reader::PairReader;
pub use runner::{PairRunner, RunSummary};
