// ============================================================================
// Logger Setup
// tracing-subscriber initialization for the command line front end
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "decimal_adder=info";
const VERBOSE_FILTER: &str = "decimal_adder=debug,info";

/// Filter directives for the given verbosity, unless `RUST_LOG` is set.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a compact fmt subscriber writing to stderr, keeping stdout for
/// results.
pub fn init_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(env_filter(false).to_string().contains(DEFAULT_FILTER));
        assert!(env_filter(true).to_string().contains("decimal_adder=debug"));
    }
}
