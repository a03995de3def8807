/// The scan worker loop — two traversal passes over the mods folder.
///
/// Pass 1 (counting) only enumerates files, giving progress events a fixed
/// denominator. Pass 2 (classifying) probes, dedups, and classifies every
/// file, batching finding lines and emitting one progress tick per file.
/// Both passes poll the shared cancel flag per entry; cancellation takes
/// effect only at those points, so a file mid-read always completes.
use crate::analysis::classify::classify;
use crate::analysis::hash_index::HashIndex;
use crate::model::{FileEntry, ScanSummary};
use crate::probe;
use crate::scanner::events::ScanEvent;
use crossbeam_channel::Sender;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Number of finding lines to accumulate before flushing to the channel.
pub const FINDING_BATCH_SIZE: usize = 50;

/// Walker over everything under `root`, configured identically for both
/// passes. Sorted traversal keeps the visit order deterministic, which is
/// what makes "first seen wins" duplicate attribution reproducible.
fn walk(root: &Path) -> jwalk::WalkDir {
    jwalk::WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()))
}

/// Drain pending finding lines into the channel, oldest first.
fn flush_findings(pending: &mut Vec<String>, events_tx: &Sender<ScanEvent>) {
    for line in pending.drain(..) {
        let _ = events_tx.send(ScanEvent::Finding(line));
    }
}

/// Run one full scan, emitting events until a terminal `Completed` or
/// `Cancelled`. Per-file errors never abort the traversal; each one is
/// absorbed by skipping the affected step for that file only.
pub(crate) fn run_scan(root: &Path, events_tx: &Sender<ScanEvent>, cancel_flag: &AtomicBool) {
    let start = Instant::now();

    // Counting pass: establish the progress denominator. No content reads,
    // no classification. Unreadable directory entries are skipped here and
    // in the classifying pass alike.
    let mut total: u64 = 0;
    for entry in walk(root).into_iter().flatten() {
        if cancel_flag.load(Ordering::Relaxed) {
            let _ = events_tx.send(ScanEvent::Cancelled(ScanSummary {
                total_files: total,
                ..ScanSummary::default()
            }));
            return;
        }
        if entry.file_type().is_file() {
            total += 1;
        }
    }
    debug!("Counting pass found {total} files in {:?}", start.elapsed());

    // Announce the denominator before the first file is touched.
    let _ = events_tx.send(ScanEvent::Progress { scanned: 0, total });

    let mut summary = ScanSummary {
        total_files: total,
        ..ScanSummary::default()
    };
    let mut index = HashIndex::new();
    let mut pending: Vec<String> = Vec::with_capacity(FINDING_BATCH_SIZE);

    // Classifying pass.
    for entry in walk(root).into_iter().flatten() {
        if cancel_flag.load(Ordering::Relaxed) {
            // Findings generated before the cancel point are still owed to
            // the sink; the terminal event stays last.
            flush_findings(&mut pending, events_tx);
            let _ = events_tx.send(ScanEvent::Cancelled(summary));
            return;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        // An unreadable size means the file vanished or is inaccessible:
        // skip it entirely — not counted, not hashed, not classified.
        let size = match probe::file_size(&path) {
            Ok(size) => size,
            Err(err) => {
                debug!("Skipping {}: {err}", path.display());
                continue;
            }
        };
        let file = FileEntry::new(path, size);

        let digest = probe::content_digest(&file.path);
        if index.observe(digest, &file.path) {
            summary.duplicate_files += 1;
            if let Some(first) = digest.as_ref().and_then(|d| index.first_seen(d)) {
                debug!("{} repeats {}", file.path.display(), first.display());
            }
            pending.push(format!("[DUPLICATE] {}", file.file_name()));
        }

        if let Some(label) = classify(&file) {
            if label.counts_as_broken() {
                summary.broken_files += 1;
            }
            pending.push(label.finding_line(&file.file_name()));
        }

        summary.scanned_files += 1;
        let _ = events_tx.send(ScanEvent::Progress {
            scanned: summary.scanned_files,
            total,
        });

        if pending.len() >= FINDING_BATCH_SIZE {
            flush_findings(&mut pending, events_tx);
        }
    }

    flush_findings(&mut pending, events_tx);
    info!(
        "Scan complete: {} of {} files, {} broken, {} duplicates in {:?}",
        summary.scanned_files,
        summary.total_files,
        summary.broken_files,
        summary.duplicate_files,
        start.elapsed()
    );
    let _ = events_tx.send(ScanEvent::Completed(summary));
}
