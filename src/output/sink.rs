use crate::errors::{ExtractorResult, OutputError};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Writes the chunks of one source file as `<dest_dir>/<index>.<ext>`.
///
/// The destination directory is created on the first emission only, so a
/// source file without chunks never touches the output tree. Indices start at
/// zero and are dense.
#[derive(Debug)]
pub struct OutputSink {
    dest_dir: PathBuf,
    extension: String,
    next_index: usize,
    dir_ready: bool,
    dir_created: bool,
}

impl OutputSink {
    pub fn new(dest_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dest_dir: dest_dir.into(),
            extension: extension.into(),
            next_index: 0,
            dir_ready: false,
            dir_created: false,
        }
    }

    /// Number of entries written so far.
    pub fn emitted(&self) -> usize {
        self.next_index
    }

    /// True when this sink had to create the destination directory.
    pub fn dir_created(&self) -> bool {
        self.dir_created
    }

    /// Path of the entry with the given index.
    pub fn entry_path(&self, index: usize) -> PathBuf {
        self.dest_dir.join(format!("{}.{}", index, self.extension))
    }

    /// Write `bytes` verbatim as the next entry and return its path.
    pub fn emit(&mut self, bytes: &[u8]) -> ExtractorResult<PathBuf> {
        self.ensure_dir()?;
        let path = self.entry_path(self.next_index);
        fs::write(&path, bytes)
            .map_err(|e| OutputError::new(&path, format!("failed to write entry: {}", e)))?;
        info!("Extracted {} (size: {} bytes)", path.display(), bytes.len());
        self.next_index += 1;
        Ok(path)
    }

    fn ensure_dir(&mut self) -> ExtractorResult<()> {
        if self.dir_ready {
            return Ok(());
        }
        if !self.dest_dir.is_dir() {
            // create_dir_all tolerates another worker creating a shared parent
            fs::create_dir_all(&self.dest_dir).map_err(|e| {
                OutputError::new(
                    &self.dest_dir,
                    format!("failed to create directory: {}", e),
                )
            })?;
            self.dir_created = true;
        }
        self.dir_ready = true;
        Ok(())
    }
}
