/// Scanner module — orchestrates mod-folder scanning.
///
/// A scan runs on a dedicated worker thread and communicates with its
/// consumer exclusively through a bounded event channel: per-file progress,
/// batched finding lines, then exactly one terminal event. The worker owns
/// all scan state (hash index, counters) — there is no shared mutable data
/// and therefore no locking.
pub mod controller;
pub mod events;

use events::ScanEvent;

use crossbeam_channel::Receiver;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tracing::info;

/// Maximum number of events that may queue up in the channel.
///
/// The consumer drains this channel on its own schedule. A burst of 4 096
/// events gives the scanner generous headroom before back-pressure causes
/// `send` to block; a slow consumer briefly stalls the scanner rather than
/// consuming unbounded heap.
pub const EVENT_CHANNEL_CAPACITY: usize = 4_096;

/// Errors surfaced synchronously when starting a scan.
///
/// Fatal to the start request only, never to the process; a running scan is
/// unaffected.
#[derive(Debug, Error)]
pub enum ScanError {
    /// `start` was called before a mods folder was supplied.
    #[error("no mods folder selected")]
    RootNotSet,

    /// A previous scan on this scanner is still running.
    #[error("a scan is already running")]
    AlreadyScanning,
}

/// Handle to a running or completed scan. Allows receiving events and
/// requesting cancellation.
pub struct ScanHandle {
    /// Receiver for events from the scan worker.
    pub events_rx: Receiver<ScanEvent>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
}

impl ScanHandle {
    /// Request the scan to stop at its next per-entry cancellation point.
    ///
    /// Cooperative: a file already mid-read or mid-validation completes
    /// normally before the flag is seen.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Scan controller — holds the configured mods folder and enforces the
/// one-scan-at-a-time rule.
#[derive(Default)]
pub struct Scanner {
    root: Option<PathBuf>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the mods folder to scan. Replaces any previous choice.
    pub fn set_root(&mut self, root: PathBuf) {
        self.root = Some(root);
    }

    /// The currently configured mods folder, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Whether a scan started by this controller is still running.
    pub fn is_scanning(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Start a scan of the configured folder on a background worker thread.
    ///
    /// Returns a [`ScanHandle`] for receiving events and requesting
    /// cancellation. Fails with [`ScanError::RootNotSet`] when no folder has
    /// been supplied, and with [`ScanError::AlreadyScanning`] while a
    /// previous scan is still running — concurrent scans are rejected
    /// outright rather than racing a second worker over shared output.
    pub fn start(&mut self) -> Result<ScanHandle, ScanError> {
        let root = self.root.clone().ok_or(ScanError::RootNotSet)?;
        if self.is_scanning() {
            return Err(ScanError::AlreadyScanning);
        }

        let (events_tx, events_rx) = crossbeam_channel::bounded::<ScanEvent>(EVENT_CHANNEL_CAPACITY);
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel_flag.clone();

        let worker = thread::Builder::new()
            .name("modsleuth-scanner".into())
            .spawn(move || {
                info!("Starting scan of {}", root.display());
                controller::run_scan(&root, &events_tx, &cancel_clone);
            })
            .expect("failed to spawn scanner thread");
        self.worker = Some(worker);

        Ok(ScanHandle {
            events_rx,
            cancel_flag,
        })
    }
}
