use super::chunk::{extract_chunk, ExtractedChunk, OversizePolicy};
use super::signature::Signature;
use crate::errors::ChunkError;
use log::debug;

/// Forward-only scan over one buffer yielding every framed chunk.
///
/// After a chunk is yielded the scan resumes at its end, so chunk ranges never
/// overlap and come out in ascending order. A signature lying inside an already
/// extracted span is never reported. A rejected chunk resumes the scan one byte
/// past its start.
#[derive(Debug, Clone)]
pub struct Carver<'a> {
    buffer: &'a [u8],
    cursor: usize,
    signature: Signature,
    policy: OversizePolicy,
}

impl<'a> Carver<'a> {
    pub fn new(buffer: &'a [u8], signature: Signature, policy: OversizePolicy) -> Self {
        Self {
            buffer,
            cursor: 0,
            signature,
            policy,
        }
    }

    /// Offset where the next scan starts.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for Carver<'a> {
    type Item = Result<ExtractedChunk<'a>, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.signature.find_next(self.buffer, self.cursor)?;
        debug!("Signature match at offset {}", pos);
        match extract_chunk(self.buffer, pos, self.policy) {
            Ok(chunk) => {
                self.cursor = chunk.end;
                Some(Ok(chunk))
            }
            Err(err) => {
                self.cursor = pos + 1;
                Some(Err(err))
            }
        }
    }
}

/// Carve `buffer` with the default `.wem` signature and the given policy.
pub fn carve_chunks(buffer: &[u8], policy: OversizePolicy) -> Carver<'_> {
    Carver::new(buffer, Signature::WEM, policy)
}
