/// Aggregate counters for one scan.
///
/// Updated monotonically by the scan worker and carried by the terminal
/// event — `Completed` with final values, or `Cancelled` with whatever had
/// accumulated at the cancellation point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files found by the counting pass; the fixed progress denominator.
    pub total_files: u64,

    /// Files actually processed by the classification pass. Equals
    /// `total_files` at completion unless files vanished between passes.
    pub scanned_files: u64,

    /// Files classified broken: empty, corrupt script archive, or corrupt
    /// package. Suspiciously large files are advisory and not counted here.
    pub broken_files: u64,

    /// Files whose content matched an earlier file in traversal order.
    pub duplicate_files: u64,
}
