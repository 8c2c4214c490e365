use super::types::{ChunkRecord, ExtractOptions, ExtractionOutcome};
use crate::errors::{ChunkError, ExtractorResult, ReadError};
use crate::output::{cleanup_destination, prune_stale_entries, OutputSink};
use crate::riff::Carver;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Carve every chunk out of the file at `path`.
///
/// Entries go to `output_base/<file name>/`. The whole file is read into
/// memory first; a read failure leaves the output tree untouched.
pub fn extract_file(
    path: &Path,
    output_base: &Path,
    options: &ExtractOptions,
) -> ExtractorResult<ExtractionOutcome> {
    let buffer = fs::read(path).map_err(|e| ReadError::new(path, e))?;
    let dest_dir = match path.file_name() {
        Some(name) => output_base.join(name),
        None => output_base.to_path_buf(),
    };
    extract_buffer(&buffer, path, &dest_dir, options)
}

/// Carve `buffer` into `dest_dir`, removing `dest_dir` when nothing was found.
///
/// `source` only labels diagnostics and the returned outcome. A write failure
/// stops processing of this buffer and is returned; entries already written
/// stay on disk.
pub fn extract_buffer(
    buffer: &[u8],
    source: &Path,
    dest_dir: &Path,
    options: &ExtractOptions,
) -> ExtractorResult<ExtractionOutcome> {
    debug!("Scanning {} ({} bytes)", source.display(), buffer.len());

    let mut sink = OutputSink::new(dest_dir, options.extension.as_str());
    let mut chunks = Vec::new();
    let mut rejected = 0usize;
    let mut bytes_written = 0u64;

    for item in Carver::new(buffer, options.signature, options.oversize) {
        let chunk = match item {
            Ok(chunk) => chunk,
            Err(ChunkError::Oversize {
                offset,
                declared,
                available,
            }) => {
                warn!(
                    "Rejected chunk in {} at pos {}: declared length {} exceeds {} available bytes",
                    source.display(),
                    offset,
                    declared,
                    available
                );
                rejected += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if chunk.clamped {
            warn!(
                "Chunk size exceeds file length in {} at pos {}: declared length {} exceeds {} available bytes, adjusting to end",
                source.display(),
                chunk.start,
                chunk.declared_len,
                chunk.available_len()
            );
        }

        let index = sink.emitted();
        let path = sink.emit(chunk.bytes)?;
        bytes_written += chunk.len() as u64;
        chunks.push(ChunkRecord {
            index,
            path,
            start: chunk.start,
            end: chunk.end,
            declared_len: chunk.declared_len,
            clamped: chunk.clamped,
        });
    }

    let cleaned_up = cleanup_destination(dest_dir, !chunks.is_empty())?;
    let pruned = if chunks.is_empty() {
        0
    } else {
        prune_stale_entries(dest_dir, &options.extension, chunks.len())?
    };

    Ok(ExtractionOutcome {
        source: source.to_path_buf(),
        dest_dir: dest_dir.to_path_buf(),
        chunks,
        rejected,
        bytes_written,
        dir_created: sink.dir_created(),
        cleaned_up,
        pruned,
    })
}
