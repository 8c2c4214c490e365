use crate::riff::{OversizePolicy, Signature};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Per-file extraction settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub signature: Signature,
    /// Extension of the written entries, without the dot
    pub extension: String,
    pub oversize: OversizePolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            signature: Signature::WEM,
            extension: "wem".to_string(),
            oversize: OversizePolicy::Clamp,
        }
    }
}

/// One written entry and the source range it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    pub index: usize,
    #[serde(serialize_with = "lossy_path")]
    pub path: PathBuf,
    pub start: usize,
    pub end: usize,
    pub declared_len: u32,
    pub clamped: bool,
}

/// Result of carving a single source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionOutcome {
    #[serde(serialize_with = "lossy_path")]
    pub source: PathBuf,
    #[serde(serialize_with = "lossy_path")]
    pub dest_dir: PathBuf,
    pub chunks: Vec<ChunkRecord>,
    /// Oversize chunks dropped under [`OversizePolicy::Reject`]
    pub rejected: usize,
    pub bytes_written: u64,
    pub dir_created: bool,
    /// True when an empty or stale destination directory was removed
    pub cleaned_up: bool,
    /// Entries from an earlier run beyond this run's last index, removed
    pub pruned: usize,
}

impl ExtractionOutcome {
    pub fn count(&self) -> usize {
        self.chunks.len()
    }

    pub fn any_extracted(&self) -> bool {
        !self.chunks.is_empty()
    }

    pub fn clamped_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.clamped).count()
    }
}

/// Serialize a path as a string, replacing bytes that are not valid UTF-8.
pub(crate) fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
