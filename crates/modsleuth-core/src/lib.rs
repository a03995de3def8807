/// ModSleuth Core — mod-folder scanning and integrity-check engine.
///
/// This crate contains all scan logic with zero UI dependencies. It is
/// designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Per-file entries, scan counters, and formatting helpers.
/// - [`probe`] — Leaf file probes: size, header bytes, content digest,
///   full-CRC archive validation.
/// - [`analysis`] — Integrity classification and duplicate detection.
/// - [`scanner`] — Background scan worker with event-channel reporting and
///   cooperative cancellation.
pub mod analysis;
pub mod model;
pub mod probe;
pub mod scanner;
