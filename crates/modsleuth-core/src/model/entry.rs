/// A single file observed during the classification pass.
///
/// Entries are produced once per traversed file and dropped as soon as the
/// file has been processed — nothing is retained beyond the scan.
use compact_str::CompactString;
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,

    /// Logical file size in bytes, as reported by metadata.
    pub size: u64,

    /// Final extension component without the dot, empty when the file has
    /// none. Stored as probed; matching is case-insensitive.
    pub extension: CompactString,
}

impl FileEntry {
    /// Build an entry from a path and its already-probed size.
    pub fn new(path: PathBuf, size: u64) -> Self {
        let extension = path
            .extension()
            .map(|ext| CompactString::new(ext.to_string_lossy()))
            .unwrap_or_default();
        Self {
            path,
            size,
            extension,
        }
    }

    /// File name for display in finding lines (lossy for non-UTF-8 names).
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""))
    }
}
