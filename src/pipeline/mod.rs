mod extractor;
mod types;

pub use extractor::{extract_buffer, extract_file};
pub use types::{ChunkRecord, ExtractOptions, ExtractionOutcome};
pub(crate) use types::lossy_path;

#[cfg(test)]
mod unit_test;
