/// File probes — the leaf I/O layer of the scan engine.
///
/// Every probe follows one rule: a single unreadable or malformed file must
/// never abort a scan. Probes return a `Result` only where the caller needs
/// to distinguish "skip this file" from "flag this file"; probes whose
/// failure simply means "invalid" or "unhashable" absorb the error.
use md5::{Digest, Md5};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Chunk size for streaming reads when hashing file contents.
pub const DIGEST_CHUNK_SIZE: usize = 4096;

/// 128-bit digest of a file's full byte content, used for exact-duplicate
/// detection within one scan. Never persisted.
///
/// MD5 is deliberate: the digest only needs to separate distinct mod files,
/// and nothing adversarial is being authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 16]);

impl From<[u8; 16]> for ContentDigest {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

/// Logical file size in bytes.
///
/// Fails on permission errors or when the file vanished mid-scan; the
/// scanner skips such files entirely (not counted, not hashed).
pub fn file_size(path: &Path) -> io::Result<u64> {
    fs::symlink_metadata(path).map(|meta| meta.len())
}

/// First `n` bytes of the file, used for magic-signature checks.
///
/// Returns fewer than `n` bytes when the file is shorter. Callers treat a
/// failed or short read as "signature not present", never as a scan error.
pub fn header_bytes(path: &Path, n: usize) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = vec![0u8; n];
    let mut filled = 0;
    while filled < n {
        let read = file.read(&mut buf[filled..])?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    buf.truncate(filled);
    Ok(buf)
}

/// Stream the whole file through MD5 in fixed-size chunks.
///
/// Returns `None` on any open or read error, so an unreadable file is simply
/// excluded from duplicate detection.
pub fn content_digest(path: &Path) -> Option<ContentDigest> {
    let mut file = File::open(path).ok()?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; DIGEST_CHUNK_SIZE];
    loop {
        let read = file.read(&mut buf).ok()?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Some(ContentDigest(hasher.finalize().into()))
}

/// Validate the file as a zip-family container.
///
/// Every member is read to EOF so its stored CRC-32 is checked against the
/// decompressed data — a full archive test pass, not just a central-directory
/// parse. Any open failure, unsupported member, or checksum mismatch makes
/// the whole file invalid.
pub fn is_valid_archive(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };
    let mut archive = match zip::ZipArchive::new(file) {
        Ok(archive) => archive,
        Err(_) => return false,
    };
    for index in 0..archive.len() {
        let mut member = match archive.by_index(index) {
            Ok(member) => member,
            Err(_) => return false,
        };
        // The CRC check runs when the member reader reaches EOF.
        if io::copy(&mut member, &mut io::sink()).is_err() {
            return false;
        }
    }
    true
}
