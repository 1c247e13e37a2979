// ============================================================================
// Driver Errors
// ============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while feeding pairs through the engine.
///
/// Invalid literals are not errors at this level; they are reported per
/// pair and the run continues.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("cannot open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DriverError {
    /// True when the input never became readable: a bad configuration or a
    /// file that could not be opened.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, DriverError::Open { .. } | DriverError::Config(_))
    }
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;
