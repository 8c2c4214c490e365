pub mod bits;
pub use bits::reader::{read_u32_le, u32_le_at};

pub mod riff;
pub use riff::{carve_chunks, find_next, Carver, ExtractedChunk, OversizePolicy, Signature};

pub mod output;
pub use output::{cleanup_destination, OutputSink};

pub mod pipeline;
pub use pipeline::{extract_buffer, extract_file, ChunkRecord, ExtractOptions, ExtractionOutcome};

pub mod walker;
pub use walker::{extract_tree, FileReport, ReportSummary, SourceFile, TreeReport, WalkOptions};

pub mod errors;
pub use errors::{
    ChunkError, ConfigError, ExtractorError, ExtractorResult, OutputError, ReadError,
};
