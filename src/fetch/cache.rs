// src/fetch/cache.rs
// =============================================================================
// On-disk response cache.
//
// A cache entry is just a file holding the raw response bytes. The file
// existing is the only validity check: entries are never revalidated
// against the origin and never expire. Bytes go to a sibling `<name>.part`
// file first and are renamed into place, so a write cut short (Ctrl-C, a
// crash) never leaves a truncated entry that would count as a hit.
//
// Callers create the parent directory; nothing here does.
// =============================================================================

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// True iff a regular file exists at `path`.
pub async fn has(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Reads the whole entry.
pub async fn read(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|e| Error::cache_io(path, e))
}

/// Creates or overwrites the entry at `path`.
pub async fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    let part = part_path(path);

    // Write everything next to the entry first
    tokio::fs::write(&part, bytes)
        .await
        .map_err(|e| Error::cache_io(&part, e))?;

    // Then publish it in one step; rename within a directory is atomic
    if let Err(e) = tokio::fs::rename(&part, path).await {
        let _ = tokio::fs::remove_file(&part).await;
        return Err(Error::cache_io(path, e));
    }
    Ok(())
}

// "raw/1068.html" -> "raw/1068.html.part"
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}
