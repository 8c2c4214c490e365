use super::types::SourceFile;
use crate::errors::{ConfigError, ExtractorResult};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every regular file under `input_root` in a deterministic order.
///
/// Symlinks are not followed. Entries sort by file name within each directory.
/// `exclude` names a directory to leave out, typically an output root nested
/// inside the input root. Unreadable entries are skipped with a warning.
pub fn collect_sources(
    input_root: &Path,
    exclude: Option<&Path>,
) -> ExtractorResult<Vec<SourceFile>> {
    if !input_root.exists() {
        return Err(ConfigError::new(format!("{} not found", input_root.display())).into());
    }
    if !input_root.is_dir() {
        return Err(
            ConfigError::new(format!("{} is not a directory", input_root.display())).into(),
        );
    }

    let excluded = exclude.and_then(|p| p.canonicalize().ok());
    let walker = WalkDir::new(input_root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry.path(), entry.file_type().is_dir(), &excluded));

    let mut sources = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_dir = entry
            .path()
            .parent()
            .and_then(|parent| parent.strip_prefix(input_root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        sources.push(SourceFile {
            path: entry.into_path(),
            relative_dir,
        });
    }

    debug!(
        "Collected {} files under {}",
        sources.len(),
        input_root.display()
    );
    Ok(sources)
}

fn is_excluded(path: &Path, is_dir: bool, excluded: &Option<PathBuf>) -> bool {
    match excluded {
        Some(excluded) if is_dir => path.canonicalize().is_ok_and(|p| &p == excluded),
        _ => false,
    }
}

/// Indices of sources whose destination directories collide on the output
/// filesystem.
///
/// Destinations are compared exactly. Case-folded comparison is only used when
/// some destinations differ by case alone and `output_root` turns out to live
/// on a case-insensitive filesystem.
pub fn find_collisions(sources: &[SourceFile], output_root: &Path) -> HashMap<usize, PathBuf> {
    let dests: Vec<PathBuf> = sources.iter().map(|s| s.dest_dir(output_root)).collect();
    let exact = group_collisions(&dests, |dest| dest.as_os_str().to_os_string());
    if !exact.is_empty() || !differ_by_case_only(&dests) {
        return exact;
    }
    if is_case_insensitive(output_root) {
        debug!("{} is case-insensitive", output_root.display());
        group_collisions(&dests, case_folded)
    } else {
        exact
    }
}

/// Collisions for a known filesystem behaviour, without touching the disk.
pub fn find_collisions_with(
    sources: &[SourceFile],
    output_root: &Path,
    case_insensitive: bool,
) -> HashMap<usize, PathBuf> {
    let dests: Vec<PathBuf> = sources.iter().map(|s| s.dest_dir(output_root)).collect();
    if case_insensitive {
        group_collisions(&dests, case_folded)
    } else {
        group_collisions(&dests, |dest| dest.as_os_str().to_os_string())
    }
}

fn group_collisions<F>(dests: &[PathBuf], key: F) -> HashMap<usize, PathBuf>
where
    F: Fn(&Path) -> OsString,
{
    let mut groups: HashMap<OsString, Vec<usize>> = HashMap::new();
    for (index, dest) in dests.iter().enumerate() {
        groups.entry(key(dest)).or_default().push(index);
    }

    let mut collisions = HashMap::new();
    for indices in groups.values().filter(|g| g.len() > 1) {
        for &index in indices {
            collisions.insert(index, dests[index].clone());
        }
    }
    collisions
}

/// Lower-cased key for UTF-8 paths. Other paths keep their exact bytes, so two
/// distinct non-UTF-8 names never share a key.
fn case_folded(dest: &Path) -> OsString {
    match dest.to_str() {
        Some(s) => OsString::from(s.to_lowercase()),
        None => dest.as_os_str().to_os_string(),
    }
}

fn differ_by_case_only(dests: &[PathBuf]) -> bool {
    let mut seen = HashSet::new();
    dests.iter().any(|dest| !seen.insert(case_folded(dest)))
}

/// Create a lower-case marker file in `output_root` and look it up in upper
/// case. Any I/O failure is treated as case-sensitive.
pub fn is_case_insensitive(output_root: &Path) -> bool {
    const MARKER: &str = ".wemcarve-casecheck";
    if let Err(e) = fs::create_dir_all(output_root) {
        warn!(
            "Cannot check case sensitivity of {}: {}",
            output_root.display(),
            e
        );
        return false;
    }
    let lower = output_root.join(MARKER);
    if let Err(e) = fs::write(&lower, b"") {
        warn!(
            "Cannot check case sensitivity of {}: {}",
            output_root.display(),
            e
        );
        return false;
    }
    let folded = output_root.join(MARKER.to_uppercase()).exists();
    let _ = fs::remove_file(&lower);
    folded
}
