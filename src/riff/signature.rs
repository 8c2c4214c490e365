use crate::bits::reader::bytes_match_at;

/// Magic token and secondary format tag identifying an embedded chunk.
///
/// A chunk starts with `magic`, followed by a 4-byte little endian length and
/// then `tag` at `tag_offset` bytes from the start of the magic token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub magic: [u8; 4],
    pub tag: [u8; 8],
    pub tag_offset: usize,
}

impl Signature {
    /// `RIFF....WAVEfmt ` framing used by Wwise `.wem` audio.
    pub const WEM: Signature = Signature {
        magic: *b"RIFF",
        tag: *b"WAVEfmt ",
        tag_offset: 8,
    };

    /// Bytes that must be present from a candidate position for it to match.
    pub fn min_len(&self) -> usize {
        self.tag_offset + self.tag.len()
    }

    /// True when both the magic token and the tag are present at `pos`.
    pub fn matches_at(&self, buffer: &[u8], pos: usize) -> bool {
        bytes_match_at(buffer, pos, &self.magic)
            && pos
                .checked_add(self.tag_offset)
                .is_some_and(|tag_pos| bytes_match_at(buffer, tag_pos, &self.tag))
    }

    /// Find the first match at or after `from`.
    ///
    /// Positions with fewer than [`Signature::min_len`] bytes left are never
    /// considered, so a returned offset always has the full header available.
    pub fn find_next(&self, buffer: &[u8], from: usize) -> Option<usize> {
        let last = buffer.len().checked_sub(self.min_len())?;
        if from > last {
            return None;
        }
        let first = self.magic[0];
        let mut pos = from;
        while pos <= last {
            // Jump straight to the next byte that can start the magic token.
            let skip = buffer[pos..=last].iter().position(|&b| b == first)?;
            pos += skip;
            if self.matches_at(buffer, pos) {
                return Some(pos);
            }
            pos += 1;
        }
        None
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature::WEM
    }
}

/// Find the next `RIFF`/`WAVEfmt ` match at or after `from`.
pub fn find_next(buffer: &[u8], from: usize) -> Option<usize> {
    Signature::WEM.find_next(buffer, from)
}
