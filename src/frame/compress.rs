//! Container encoder.
//!
//! Wraps either a token-group payload ("LZFu") or the raw input ("MELA") in
//! the 16-byte header. Encoding cannot fail; inputs whose sizes do not fit the
//! 32-bit header fields get saturated size fields and will not decode.

use crate::block::compress::compress_payload;
use crate::checksum::crc32;
use crate::frame::header::{size_field, write_header};
use crate::frame::types::{ContainerHeader, ContainerType, HEADER_SIZE};

/// Encode `data` into a complete container.
///
/// With `use_compression` the payload is the LZ77 token stream and the header
/// carries its CRC-32. Without it the input is stored verbatim with a zero
/// checksum.
pub fn encode(data: &[u8], use_compression: bool) -> Vec<u8> {
    let kind = if use_compression {
        ContainerType::Compressed
    } else {
        ContainerType::Stored
    };
    encode_as(data, kind)
}

/// Encode `data` into a container of the given type.
pub fn encode_as(data: &[u8], kind: ContainerType) -> Vec<u8> {
    match kind {
        ContainerType::Compressed => {
            let payload = compress_payload(data);
            let header = ContainerHeader {
                compressed_size: size_field(payload.len()),
                raw_size: raw_size_field(data.len()),
                tag: kind.tag(),
                checksum: crc32(&payload),
            };
            assemble(&header, &payload)
        }
        ContainerType::Stored => {
            let header = ContainerHeader {
                compressed_size: size_field(data.len()),
                raw_size: raw_size_field(data.len()),
                tag: kind.tag(),
                checksum: 0,
            };
            assemble(&header, data)
        }
    }
}

fn assemble(header: &ContainerHeader, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&write_header(header));
    out.extend_from_slice(payload);
    out
}

#[inline]
fn raw_size_field(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
