use crate::bits::reader::read_u32_le;
use crate::errors::ChunkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Magic token plus the little endian length field.
pub const CHUNK_HEADER_SIZE: usize = 8;

/// What to do when a chunk declares more bytes than the buffer holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    /// Keep the chunk, truncated at the end of the buffer
    #[default]
    Clamp,
    /// Drop the chunk and keep scanning one byte past its start
    Reject,
}

impl OversizePolicy {
    pub fn name(&self) -> &str {
        match self {
            OversizePolicy::Clamp => "clamp",
            OversizePolicy::Reject => "reject",
        }
    }
}

impl FromStr for OversizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(OversizePolicy::Clamp),
            "reject" => Ok(OversizePolicy::Reject),
            _ => Err(format!(
                "Invalid oversize policy: {s}. Valid policies are: clamp, reject"
            )),
        }
    }
}

impl fmt::Display for OversizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One chunk sliced out of a source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedChunk<'a> {
    /// Offset of the magic token
    pub start: usize,
    /// Exclusive end offset, also where the next scan resumes
    pub end: usize,
    /// Length field as stored in the header
    pub declared_len: u32,
    /// True when `end` was cut back to the buffer length
    pub clamped: bool,
    pub bytes: &'a [u8],
}

impl ExtractedChunk<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Bytes present after the 8 header bytes, the counterpart of `declared_len`.
    pub fn available_len(&self) -> usize {
        self.len().saturating_sub(CHUNK_HEADER_SIZE)
    }

    /// Total size the header claims, including the 8 header bytes.
    pub fn declared_size(&self) -> u64 {
        CHUNK_HEADER_SIZE as u64 + u64::from(self.declared_len)
    }
}

/// Slice the chunk whose magic token starts at `pos`.
///
/// The length field at `[pos + 4, pos + 8)` is read as an unsigned little
/// endian integer. A length of zero yields a header-only chunk. When the
/// declared end runs past the buffer, `policy` decides between clamping and
/// rejecting.
pub fn extract_chunk(
    buffer: &[u8],
    pos: usize,
    policy: OversizePolicy,
) -> Result<ExtractedChunk<'_>, ChunkError> {
    let mut cursor = pos.saturating_add(4);
    let Some(declared_len) = read_u32_le(buffer, &mut cursor) else {
        return Err(ChunkError::Truncated {
            offset: pos,
            available: buffer.len().saturating_sub(pos),
        });
    };

    let naive_end = pos as u64 + CHUNK_HEADER_SIZE as u64 + u64::from(declared_len);
    let (end, clamped) = if naive_end > buffer.len() as u64 {
        match policy {
            OversizePolicy::Clamp => (buffer.len(), true),
            OversizePolicy::Reject => {
                return Err(ChunkError::Oversize {
                    offset: pos,
                    declared: declared_len,
                    available: buffer.len() - cursor,
                })
            }
        }
    } else {
        (naive_end as usize, false)
    };

    Ok(ExtractedChunk {
        start: pos,
        end,
        declared_len,
        clamped,
        bytes: &buffer[pos..end],
    })
}
