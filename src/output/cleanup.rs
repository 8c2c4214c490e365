use crate::errors::{ExtractorResult, OutputError};
use log::debug;
use std::fs;
use std::path::Path;

/// Remove `dest_dir` when nothing was extracted for its source file.
///
/// Covers both a directory created during this pass and one left behind by an
/// earlier run. Returns whether a directory was removed.
pub fn cleanup_destination(dest_dir: &Path, any_extracted: bool) -> ExtractorResult<bool> {
    if any_extracted {
        return Ok(false);
    }
    match fs::symlink_metadata(dest_dir) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(dest_dir).map_err(|e| {
                OutputError::new(dest_dir, format!("failed to remove directory: {}", e))
            })?;
            debug!("Removed empty destination {}", dest_dir.display());
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Delete `<index>.<ext>` entries with `index >= keep` left by an earlier run.
///
/// Keeps the directory holding exactly `0..keep`. Files that do not follow the
/// entry naming are left alone. Returns the number of entries removed.
pub fn prune_stale_entries(
    dest_dir: &Path,
    extension: &str,
    keep: usize,
) -> ExtractorResult<usize> {
    let entries = match fs::read_dir(dest_dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(0),
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_stale = entry_index(&path, extension).is_some_and(|index| index >= keep);
        if !is_stale || !path.is_file() {
            continue;
        }
        fs::remove_file(&path).map_err(|e| {
            OutputError::new(&path, format!("failed to remove stale entry: {}", e))
        })?;
        debug!("Removed stale entry {}", path.display());
        removed += 1;
    }
    Ok(removed)
}

fn entry_index(path: &Path, extension: &str) -> Option<usize> {
    if path.extension()?.to_str()? != extension {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    // Only canonical decimal names, so "01.wem" is not mistaken for entry 1.
    if !stem.bytes().all(|b| b.is_ascii_digit()) || (stem.len() > 1 && stem.starts_with('0')) {
        return None;
    }
    stem.parse().ok()
}
