/*
# Bits Reader Module

 Bounds-checked readers over byte slices for framing fields in untrusted data.
 Every reader returns `None` instead of panicking when the requested range runs
 past the end of the slice.

 Key components:
 - Position-tracking reader: `read_u32_le()`
 - Fixed-offset helpers: `u32_le_at()`, `bytes_match_at()`
*/

/// Read a 32-bit little endian value from a byte slice advancing the position.
pub fn read_u32_le(data: &[u8], pos: &mut usize) -> Option<u32> {
    let v = u32_le_at(data, *pos)?;
    *pos += 4;
    Some(v)
}

/// Read a 32-bit little endian value at `offset` without moving any cursor.
pub fn u32_le_at(data: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let bytes = data.get(offset..end)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// True when `data[offset..offset + pattern.len()]` exists and equals `pattern`.
pub fn bytes_match_at(data: &[u8], offset: usize, pattern: &[u8]) -> bool {
    match offset.checked_add(pattern.len()) {
        Some(end) => data.get(offset..end) == Some(pattern),
        None => false,
    }
}
