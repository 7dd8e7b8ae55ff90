//! Byte-level file helpers used by the store.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Stream `src` into `dst`, creating or truncating `dst`.
///
/// Both handles are dropped before returning; the writer is flushed and synced
/// first so a successful return means the whole copy reached the file.
pub(crate) fn copy_bytes(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.sync_all()?;
    Ok(copied)
}

/// Whether the file at `path` holds exactly `expected`.
pub(crate) fn content_equals(path: &Path, expected: &[u8]) -> io::Result<bool> {
    if fs::metadata(path)?.len() != expected.len() as u64 {
        return Ok(false);
    }
    Ok(fs::read(path)? == expected)
}
