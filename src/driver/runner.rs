// ============================================================================
// Pair Runner
// Feeds literal pairs through the validator and the adder
// ============================================================================

use super::config::DriverConfig;
use super::error::{DriverError, DriverResult};
use super::pair_reader::PairReader;
use crate::interfaces::{PairEvent, ReportSink};
use crate::numeric::{add_strings, validate, NumericError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counts for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    /// Pairs read from the input
    pub pairs: usize,

    /// Pairs that were added
    pub summed: usize,

    /// Pairs skipped because a token was invalid
    pub rejected: usize,

    /// Trailing token that had no partner
    pub dangling: Option<String>,
}

/// Runs pairs of literals through the engine and reports each outcome
pub struct PairRunner {
    /// Sink for per-pair events
    sink: Arc<dyn ReportSink>,
}

impl PairRunner {
    /// Create a new runner
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    /// Validate and add a single pair.
    ///
    /// `lhs` is checked before `rhs`; only the first invalid token is
    /// reported and the pair is not added.
    pub fn process_pair(&self, lhs: &str, rhs: &str) -> PairEvent {
        for token in [lhs, rhs] {
            if let Err(NumericError::InvalidLiteral { reason, .. }) = validate(token) {
                tracing::warn!(token, %reason, "skipping pair with invalid number");
                return PairEvent::Rejected {
                    token: token.to_string(),
                    reason,
                };
            }
        }

        let sum = add_strings(lhs, rhs);
        tracing::debug!(lhs, rhs, sum = %sum, "pair summed");
        PairEvent::Summed {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            sum,
        }
    }

    /// Process every pair from `reader`, reporting each to the sink.
    ///
    /// # Errors
    /// Read failures and sink write failures stop the run.
    pub fn run<R: BufRead>(&self, reader: R) -> DriverResult<RunSummary> {
        let mut summary = RunSummary::default();
        let mut pairs = PairReader::new(reader);

        for pair in pairs.by_ref() {
            let (lhs, rhs) = pair?;
            let event = self.process_pair(&lhs, &rhs);

            summary.pairs += 1;
            match event {
                PairEvent::Summed { .. } => summary.summed += 1,
                PairEvent::Rejected { .. } => summary.rejected += 1,
            }

            self.sink.on_event(&event).map_err(DriverError::Write)?;
        }

        summary.dangling = pairs.dangling_token().map(str::to_string);

        tracing::info!(
            pairs = summary.pairs,
            summed = summary.summed,
            rejected = summary.rejected,
            "run complete"
        );
        Ok(summary)
    }

    /// Open the configured input file and run it.
    ///
    /// # Errors
    /// `Config` if the configuration is invalid, `Open` if the file cannot be
    /// opened, otherwise as [`run`](Self::run).
    pub fn run_path(&self, config: &DriverConfig) -> DriverResult<RunSummary> {
        config.validate().map_err(DriverError::Config)?;

        let file = File::open(&config.input).map_err(|source| DriverError::Open {
            path: config.input.clone(),
            source,
        })?;

        tracing::info!(input = %config.input.display(), "reading pairs");
        self.run(BufReader::new(file))
    }
}
