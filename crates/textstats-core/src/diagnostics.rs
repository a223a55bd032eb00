//! Diagnostic reporting for recoverable failures.
//!
//! Some heuristics recover locally from a failure and carry on with a
//! partial result. They hand the failure to a [`DiagnosticSink`] on the way
//! out. Sinks are fire-and-forget: nothing they do can change a returned
//! value.

use crate::error::StatisticsError;

/// Receives reports about failures that were recovered from.
pub trait DiagnosticSink: Send + Sync {
    /// Record a failure along with a human-readable description of what was being computed.
    fn report(&self, message: &str, error: &StatisticsError);
}

/// Forwards reports to `tracing` as warnings. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str, error: &StatisticsError) {
        tracing::warn!(error = %error, "{message}");
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _message: &str, _error: &StatisticsError) {}
}
