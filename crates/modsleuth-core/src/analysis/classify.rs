/// Per-file integrity classification.
///
/// One label at most per file, decided by a fixed priority chain over the
/// probes in [`crate::probe`]. Duplicate detection is deliberately not part
/// of classification — the two are orthogonal, and a file can carry both a
/// corruption label and the duplicate flag.
use crate::model::FileEntry;
use crate::probe;

/// Extension of script mod archives (zip containers).
pub const SCRIPT_ARCHIVE_EXT: &str = "ts4script";

/// Extension of resource package files (DBPF containers).
pub const RESOURCE_PACKAGE_EXT: &str = "package";

/// Magic signature at the start of every well-formed package file.
pub const PACKAGE_MAGIC: &[u8; 4] = b"DBPF";

/// Files larger than this are flagged as suspicious.
pub const SUSPICIOUS_SIZE_BYTES: u64 = 500 * 1024 * 1024;

/// Primary integrity label for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Zero-byte file.
    BrokenEmpty,
    /// Script archive that is not a valid zip container.
    CorruptArchive,
    /// Package file without the `DBPF` signature.
    CorruptPackage,
    /// Unusually large file. Advisory only.
    Suspicious,
}

impl Classification {
    /// Whether this label counts toward the broken-files total.
    pub fn counts_as_broken(self) -> bool {
        !matches!(self, Self::Suspicious)
    }

    /// Render the finding line for a file carrying this label.
    pub fn finding_line(self, file_name: &str) -> String {
        match self {
            Self::BrokenEmpty => format!("[BROKEN] {file_name} (0 bytes)"),
            Self::CorruptArchive => format!("[CORRUPT SCRIPT] {file_name}"),
            Self::CorruptPackage => format!("[CORRUPT PACKAGE] {file_name}"),
            Self::Suspicious => format!("[SUSPICIOUS] {file_name} (Very large)"),
        }
    }
}

/// Classify one file. First match wins:
///
/// 1. zero-byte files are broken — the cheapest and most unambiguous signal,
///    checked first so an extension check can never shadow it;
/// 2. script archives must survive a full zip CRC pass;
/// 3. package files must start with the `DBPF` signature — an unreadable or
///    short header counts as a mismatch;
/// 4. anything over 500 MiB is suspicious, advisory only.
pub fn classify(entry: &FileEntry) -> Option<Classification> {
    if entry.size == 0 {
        return Some(Classification::BrokenEmpty);
    }
    if entry.extension.eq_ignore_ascii_case(SCRIPT_ARCHIVE_EXT)
        && !probe::is_valid_archive(&entry.path)
    {
        return Some(Classification::CorruptArchive);
    }
    if entry.extension.eq_ignore_ascii_case(RESOURCE_PACKAGE_EXT) {
        let header = probe::header_bytes(&entry.path, PACKAGE_MAGIC.len()).unwrap_or_default();
        if header.as_slice() != PACKAGE_MAGIC.as_slice() {
            return Some(Classification::CorruptPackage);
        }
    }
    if entry.size > SUSPICIOUS_SIZE_BYTES {
        return Some(Classification::Suspicious);
    }
    None
}
