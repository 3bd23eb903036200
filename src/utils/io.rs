// Byte-level field readers for scratch buffers
//
// All multi-byte OGG and Vorbis header fields are little-endian. These
// helpers bound-check against the buffer so a truncated scratch window
// surfaces as a typed error instead of a slice panic.

use crate::error::{Result, VorbisError};

/// Read a little-endian 32-bit integer at `pos`
pub fn le_u32(buffer: &[u8], pos: usize) -> Result<u32> {
    let end = pos.checked_add(4).ok_or(VorbisError::TruncatedInput)?;
    let bytes = buffer.get(pos..end).ok_or(VorbisError::TruncatedInput)?;
    // Slice length is checked above; the conversion cannot fail
    Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
}

/// Read a little-endian 64-bit integer at `pos`
pub fn le_u64(buffer: &[u8], pos: usize) -> Result<u64> {
    let end = pos.checked_add(8).ok_or(VorbisError::TruncatedInput)?;
    let bytes = buffer.get(pos..end).ok_or(VorbisError::TruncatedInput)?;
    Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
}
