/// Analysis modules — per-file integrity classification and duplicate
/// detection.

pub mod classify;
pub mod hash_index;

pub use classify::{classify, Classification};
pub use hash_index::HashIndex;
