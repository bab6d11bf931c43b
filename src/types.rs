use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// A single file discovered during the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// The path relative to the scanned root, as shown in block headers.
    pub relative: PathBuf,
    /// The allow-list extension the file matched, normalized (e.g. `.md`).
    pub extension: String,
    /// Last modification time, if the stat succeeded.
    pub modified: Option<SystemTime>,
    /// Creation time, where the platform records one and the stat succeeded.
    pub created: Option<SystemTime>,
}

/// The complete result of a scan, ready for the digest writer.
#[derive(Debug, Serialize, Deserialize)]
pub struct DigestResult {
    /// The directory tree overview.
    ///
    /// Either the captured output of the external `tree` command or a
    /// bracketed placeholder when the command was unavailable.
    pub tree: String,
    /// Matching files in final digest order.
    pub files: Vec<FileEntry>,
}
