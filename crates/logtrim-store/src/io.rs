//! Staged file writes
//!
//! The live log must never be observable in a half-written state, so every
//! replacement goes through a sibling temp file followed by a rename.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Replace `path` atomically: stage the full contents next to it, then
/// rename over the destination. A crash mid-write leaves the original file
/// intact and at worst a stray `.tmp` sibling.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut staged: OsString = path.as_os_str().to_os_string();
    staged.push(".tmp");
    let staged = PathBuf::from(staged);

    fs::write(&staged, data)?;
    fs::rename(&staged, path)?;
    Ok(())
}
