//! Container decoder.
//!
//! Validation order: header length, declared payload length, type tag, then
//! the per-type checks (checksum for "LZFu", zero checksum and raw size for
//! "MELA"). Strict mode adds end-marker and size checks on top.

use crate::block::decompress::{decompress_payload, Termination};
use crate::block::types::MAX_MATCH;
use crate::checksum::crc32;
use crate::frame::header::{payload_slice, read_header};
use crate::frame::types::{ContainerType, CrtfError, DecodeOptions, Decoded};

/// Decode a container with default options.
pub fn decode(src: &[u8]) -> Result<Vec<u8>, CrtfError> {
    decode_with(src, &DecodeOptions::default()).map(|d| d.data)
}

/// Decode a container, reporting how the token stream ended.
pub fn decode_with(src: &[u8], opts: &DecodeOptions) -> Result<Decoded, CrtfError> {
    let header = read_header(src)?;
    let payload = payload_slice(&header, src)?;
    let container = header.container_type()?;
    let declared_size = header.raw_size as usize;

    match container {
        ContainerType::Compressed => {
            let actual = crc32(payload);
            if actual != header.checksum {
                return Err(CrtfError::ChecksumMismatch {
                    expected: header.checksum,
                    actual,
                });
            }

            // The header is untrusted; never reserve more than the payload
            // could possibly expand to.
            let hint = declared_size.min(payload.len().saturating_mul(MAX_MATCH));
            let (data, termination) = decompress_payload(payload, hint);

            if opts.strict {
                if termination == Termination::Exhausted {
                    return Err(CrtfError::MissingEndMarker);
                }
                if data.len() != declared_size {
                    return Err(CrtfError::SizeMismatch {
                        expected: declared_size,
                        actual: data.len(),
                    });
                }
            }

            Ok(Decoded {
                data,
                container,
                termination: Some(termination),
                declared_size,
            })
        }
        ContainerType::Stored => {
            if header.checksum != 0 {
                return Err(CrtfError::InvalidStoredChecksum(header.checksum));
            }
            if declared_size > payload.len() {
                return Err(CrtfError::TruncatedPayload {
                    declared: declared_size,
                    available: payload.len(),
                });
            }
            Ok(Decoded {
                data: payload[..declared_size].to_vec(),
                container,
                termination: None,
                declared_size,
            })
        }
    }
}
