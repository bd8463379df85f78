//! Byte-order helpers and the 16-byte container header codec.
//!
//! Layout (all fields little-endian `u32`):
//!
//! | offset | field            |
//! |--------|------------------|
//! | 0      | compressed size  |
//! | 4      | raw size         |
//! | 8      | type tag         |
//! | 12     | CRC-32           |

use crate::frame::types::{ContainerHeader, CrtfError, HEADER_SIZE, SIZE_FIELD_BIAS};

// ─────────────────────────────────────────────────────────────────────────────
// Byte-order I/O helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` from `src` at byte `offset`.
///
/// Callers check bounds first.
#[inline]
pub fn read_le32(src: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}

/// Write a little-endian `u32` into `dst` at byte `offset`.
#[inline]
pub fn write_le32(dst: &mut [u8], offset: usize, value: u32) {
    dst[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

// ─────────────────────────────────────────────────────────────────────────────
// Header codec
// ─────────────────────────────────────────────────────────────────────────────

/// Parse the header at the start of `src`.
///
/// Only the length of `src` is checked here; the fields themselves are
/// validated by the decoder, which needs them in a particular order.
pub fn read_header(src: &[u8]) -> Result<ContainerHeader, CrtfError> {
    if src.len() < HEADER_SIZE {
        return Err(CrtfError::TooShort { len: src.len() });
    }
    Ok(ContainerHeader {
        compressed_size: read_le32(src, 0),
        raw_size: read_le32(src, 4),
        tag: [src[8], src[9], src[10], src[11]],
        checksum: read_le32(src, 12),
    })
}

/// Serialise `header` into its 16 wire bytes.
pub fn write_header(header: &ContainerHeader) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    write_le32(&mut out, 0, header.compressed_size);
    write_le32(&mut out, 4, header.raw_size);
    out[8..12].copy_from_slice(&header.tag);
    write_le32(&mut out, 12, header.checksum);
    out
}

/// The compressed-size field for a payload of `payload_len` bytes.
///
/// Saturates for payloads the 32-bit field cannot describe.
#[inline]
pub fn size_field(payload_len: usize) -> u32 {
    u32::try_from(payload_len.saturating_add(SIZE_FIELD_BIAS)).unwrap_or(u32::MAX)
}

/// Slice the payload declared by `header` out of a full container.
pub fn payload_slice<'a>(header: &ContainerHeader, src: &'a [u8]) -> Result<&'a [u8], CrtfError> {
    let declared = header.payload_len()?;
    let available = src.len().saturating_sub(HEADER_SIZE);
    if declared > available {
        return Err(CrtfError::TruncatedPayload {
            declared,
            available,
        });
    }
    Ok(&src[HEADER_SIZE..HEADER_SIZE + declared])
}
