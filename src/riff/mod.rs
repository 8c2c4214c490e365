pub mod carver;
pub use carver::{carve_chunks, Carver};
pub mod chunk;
pub use chunk::{extract_chunk, ExtractedChunk, OversizePolicy, CHUNK_HEADER_SIZE};
pub mod signature;
pub use signature::{find_next, Signature};
