use crate::errors::ExtractorResult;
use crate::pipeline::{lossy_path, ExtractionOutcome};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Tree walk settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Worker count. `1` runs on the calling thread, `0` lets rayon pick one
    /// worker per CPU.
    pub jobs: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

/// A regular file found under the input root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Containing directory relative to the input root, empty for the root itself
    pub relative_dir: PathBuf,
}

impl SourceFile {
    /// Directory that receives this file's destination directory.
    pub fn output_base(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.relative_dir)
    }

    /// `output_root/relative_dir/<file name>`
    pub fn dest_dir(&self, output_root: &Path) -> PathBuf {
        let base = self.output_base(output_root);
        match self.path.file_name() {
            Some(name) => base.join(name),
            None => base,
        }
    }
}

/// Per-file result collected by the walker
#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub result: ExtractorResult<ExtractionOutcome>,
}

/// Aggregated result of one tree run, in walk order
#[derive(Debug)]
pub struct TreeReport {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub files: Vec<FileReport>,
}

impl TreeReport {
    pub fn files_visited(&self) -> usize {
        self.files.len()
    }

    pub fn files_with_chunks(&self) -> usize {
        self.outcomes().filter(|o| o.any_extracted()).count()
    }

    pub fn chunks_written(&self) -> usize {
        self.outcomes().map(|o| o.count()).sum()
    }

    pub fn bytes_written(&self) -> u64 {
        self.outcomes().map(|o| o.bytes_written).sum()
    }

    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_err()).count()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &ExtractionOutcome> {
        self.files.iter().filter_map(|f| f.result.as_ref().ok())
    }

    /// Serializable view used for the JSON report.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            input_root: self.input_root.clone(),
            output_root: self.output_root.clone(),
            files_visited: self.files_visited(),
            files_with_chunks: self.files_with_chunks(),
            chunks_written: self.chunks_written(),
            bytes_written: self.bytes_written(),
            failures: self.failures(),
            files: self.files.iter().map(FileSummary::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    #[serde(serialize_with = "lossy_path")]
    pub input_root: PathBuf,
    #[serde(serialize_with = "lossy_path")]
    pub output_root: PathBuf,
    pub files_visited: usize,
    pub files_with_chunks: usize,
    pub chunks_written: usize,
    pub bytes_written: u64,
    pub failures: usize,
    pub files: Vec<FileSummary>,
}

#[derive(Debug, Serialize)]
pub struct FileSummary {
    #[serde(serialize_with = "lossy_path")]
    pub source: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ExtractionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&FileReport> for FileSummary {
    fn from(report: &FileReport) -> Self {
        let (outcome, error) = match &report.result {
            Ok(outcome) => (Some(outcome.clone()), None),
            Err(err) => (None, Some(err.to_string())),
        };
        FileSummary {
            source: report.source.clone(),
            outcome,
            error,
        }
    }
}
