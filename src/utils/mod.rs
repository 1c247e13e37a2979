// ============================================================================
// Utilities Module
// Process-level helpers for binaries built on the library
// ============================================================================

#[cfg(feature = "logging")]
pub mod logger;
