// ============================================================================
// Report Sink Interface
// Defines the contract for reporting per-pair addition results
// ============================================================================

use crate::numeric::LiteralError;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the pair runner
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PairEvent {
    /// Both tokens were valid and have been added
    Summed {
        lhs: String,
        rhs: String,
        sum: String,
    },

    /// A token failed validation; the pair was skipped
    Rejected { token: String, reason: LiteralError },
}

impl fmt::Display for PairEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairEvent::Summed { lhs, rhs, sum } => write!(f, "{} + {} = {}", lhs, rhs, sum),
            PairEvent::Rejected { token, .. } => write!(f, "Invalid number: {}", token),
        }
    }
}

/// Sink trait for pair results.
/// Implementations can print, log, collect, etc.
pub trait ReportSink: Send + Sync {
    /// Handle a pair event
    fn on_event(&self, event: &PairEvent) -> io::Result<()>;

    /// Batch handler (optional optimization)
    fn on_events(&self, events: &[PairEvent]) -> io::Result<()> {
        for event in events {
            self.on_event(event)?;
        }
        Ok(())
    }
}

/// No-op sink for testing
pub struct NoOpSink;

impl ReportSink for NoOpSink {
    fn on_event(&self, _event: &PairEvent) -> io::Result<()> {
        Ok(())
    }
}

/// Logging sink
pub struct LoggingSink;

impl ReportSink for LoggingSink {
    fn on_event(&self, event: &PairEvent) -> io::Result<()> {
        tracing::debug!("Pair event: {:?}", event);
        Ok(())
    }
}

/// Writes one line per event in the classic driver format:
/// `1.5 + 2.3 = 3.8` or `Invalid number: abc`.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ReportSink for WriterSink<W> {
    fn on_event(&self, event: &PairEvent) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", event)?;
        writer.flush()
    }
}

/// Keeps every event in memory
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<PairEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<PairEvent> {
        self.events.lock().clone()
    }

    /// Sums in arrival order
    pub fn sums(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                PairEvent::Summed { sum, .. } => Some(sum.clone()),
                PairEvent::Rejected { .. } => None,
            })
            .collect()
    }
}

impl ReportSink for CollectingSink {
    fn on_event(&self, event: &PairEvent) -> io::Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summed() -> PairEvent {
        PairEvent::Summed {
            lhs: "1.5".to_string(),
            rhs: "2.3".to_string(),
            sum: "3.8".to_string(),
        }
    }

    fn rejected() -> PairEvent {
        PairEvent::Rejected {
            token: "abc".to_string(),
            reason: LiteralError::InvalidCharacter { ch: 'a', index: 0 },
        }
    }

    #[test]
    fn test_noop_sink() {
        assert!(NoOpSink.on_event(&summed()).is_ok());
        assert!(LoggingSink.on_events(&[summed(), rejected()]).is_ok());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(summed().to_string(), "1.5 + 2.3 = 3.8");
        assert_eq!(rejected().to_string(), "Invalid number: abc");
    }

    #[test]
    fn test_writer_sink_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.on_events(&[summed(), rejected()]).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "1.5 + 2.3 = 3.8\nInvalid number: abc\n");
    }

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        sink.on_event(&rejected()).unwrap();
        sink.on_event(&summed()).unwrap();
        assert_eq!(sink.events(), vec![rejected(), summed()]);
        assert_eq!(sink.sums(), vec!["3.8".to_string()]);
    }
}
