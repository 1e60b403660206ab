//! Append-mode log files.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Opens `path` for appending, creating the file and any missing parent
/// directories.
///
/// Every line is handed to the file in a single write, and `O_APPEND`
/// places each write at the current end of file, so several processes can
/// share one log file without tearing lines.
pub fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    tracing::debug!(path = %path.display(), "opening log file");
    OpenOptions::new().create(true).append(true).open(path)
}
