/// Scan events — lightweight messages sent from the scan worker to the
/// consuming sink via a crossbeam channel.
use crate::model::ScanSummary;

/// Events produced by a running scan, delivered in generation order.
///
/// The stream for one scan is zero or more `Progress`/`Finding` events
/// interleaved, followed by exactly one terminal `Completed` or `Cancelled`.
/// Nothing is sent after the terminal event, and the engine retains no event
/// after emitting it.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// Per-file progress tick. `total` is the denominator established by the
    /// counting pass and stays constant for the whole scan.
    Progress { scanned: u64, total: u64 },

    /// One formatted finding line, e.g. `[CORRUPT PACKAGE] chair.package`.
    /// The worker batches findings and flushes them 50 at a time, so these
    /// arrive in bursts rather than per file.
    Finding(String),

    /// Scan finished normally with final counters.
    Completed(ScanSummary),

    /// Scan stopped at a cancellation point with partial counters.
    Cancelled(ScanSummary),
}
