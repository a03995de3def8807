//! ModSleuth — Sims 4 mod-folder integrity scanner.
//!
//! Thin binary entry point. All scan logic lives in the `modsleuth-core`
//! crate; this binary is a pure event consumer that renders the scan stream
//! as a terminal report.

use anyhow::Context;
use clap::Parser;
use modsleuth_core::model::{format_count, ScanSummary};
use modsleuth_core::scanner::events::ScanEvent;
use modsleuth_core::scanner::Scanner;
use std::io::Write;
use std::path::PathBuf;

/// Scan a Sims 4 Mods folder for empty, corrupt, oversized, and duplicate
/// files.
#[derive(Parser)]
#[command(name = "modsleuth", version, about)]
struct Cli {
    /// Mods folder to scan
    mods_folder: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(
        cli.mods_folder.is_dir(),
        "{} is not a directory",
        cli.mods_folder.display()
    );

    println!(
        "Scanning {} — started {}",
        cli.mods_folder.display(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let mut scanner = Scanner::new();
    scanner.set_root(cli.mods_folder);
    let handle = scanner.start().context("failed to start scan")?;

    // Findings go to stdout; the rewritten progress line stays on stderr so
    // redirected output contains only findings and the report.
    let mut stderr = std::io::stderr();
    for event in handle.events_rx.iter() {
        match event {
            ScanEvent::Progress { scanned, total } => {
                if scanned.is_multiple_of(100) || scanned == total {
                    let _ = write!(
                        stderr,
                        "\rScanning... {} / {} files",
                        format_count(scanned),
                        format_count(total)
                    );
                    let _ = stderr.flush();
                }
            }
            ScanEvent::Finding(line) => println!("{line}"),
            ScanEvent::Completed(summary) => {
                let _ = writeln!(stderr);
                print_report("Scan Complete", &summary);
                break;
            }
            ScanEvent::Cancelled(summary) => {
                let _ = writeln!(stderr);
                print_report("Scan Cancelled", &summary);
                break;
            }
        }
    }

    Ok(())
}

fn print_report(heading: &str, summary: &ScanSummary) {
    println!();
    println!("{heading}");
    println!("Total Files: {}", format_count(summary.total_files));
    println!("Scanned Files: {}", format_count(summary.scanned_files));
    println!("Broken Files: {}", format_count(summary.broken_files));
    println!("Duplicate Files: {}", format_count(summary.duplicate_files));
}
