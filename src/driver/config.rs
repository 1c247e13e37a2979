// ============================================================================
// Driver Configuration
// Where pairs come from and how much the run reports about itself
// ============================================================================

use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a file-driven run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Text file holding whitespace-separated literal pairs
    pub input: PathBuf,

    /// Emit debug-level logs for every pair
    pub verbose: bool,
}

impl DriverConfig {
    /// Create a new configuration with required parameters
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            verbose: false,
        }
    }

    /// Builder method: Enable verbose logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input.as_os_str().is_empty() {
            return Err("Input path cannot be empty".to_string());
        }

        if self.input.to_string_lossy().contains('\0') {
            return Err("Input path contains null bytes".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = DriverConfig::new("numbers.txt");

        assert_eq!(config.input, PathBuf::from("numbers.txt"));
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DriverConfig::new("numbers.txt").with_verbose(true);
        assert!(config.verbose);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            DriverConfig::new("").validate(),
            Err("Input path cannot be empty".to_string())
        );
        assert_eq!(
            DriverConfig::new("bad\0name").validate(),
            Err("Input path contains null bytes".to_string())
        );
    }
}
