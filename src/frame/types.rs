//! Container format types, constants, and error handling.
//!
//! Covers:
//! - Header geometry (`HEADER_SIZE`, `SIZE_FIELD_BIAS`)
//! - Type tags (`COMPRESSED_TAG` = "LZFu", `STORED_TAG` = "MELA")
//! - [`ContainerType`] and [`ContainerHeader`]
//! - [`DecodeOptions`] / [`Decoded`] for the configurable decode path
//! - [`CrtfError`], the single error type of the codec

use crate::block::Termination;
use crate::config;

// ─────────────────────────────────────────────────────────────────────────────
// Header geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Size of the fixed container header in bytes.
pub const HEADER_SIZE: usize = 16;

/// The compressed-size field counts the payload plus the 12 header bytes that
/// follow the field itself.
pub const SIZE_FIELD_BIAS: usize = 12;

/// Type tag of an LZ77-compressed container.
pub const COMPRESSED_TAG: [u8; 4] = *b"LZFu";

/// Type tag of a stored (uncompressed) container.
pub const STORED_TAG: [u8; 4] = *b"MELA";

/// `COMPRESSED_TAG` read as a little-endian `u32`.
pub const MAGIC_COMPRESSED: u32 = 0x7546_5A4C;

/// `STORED_TAG` read as a little-endian `u32`.
pub const MAGIC_STORED: u32 = 0x414C_454D;

// ─────────────────────────────────────────────────────────────────────────────
// Container type
// ─────────────────────────────────────────────────────────────────────────────

/// How the payload of a container is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerType {
    /// Token-group stream, checksummed.
    Compressed,
    /// Raw bytes, checksum field fixed to zero.
    Stored,
}

impl ContainerType {
    pub fn tag(self) -> [u8; 4] {
        match self {
            ContainerType::Compressed => COMPRESSED_TAG,
            ContainerType::Stored => STORED_TAG,
        }
    }

    /// Recognise a type tag; `None` for anything else.
    pub fn from_tag(tag: [u8; 4]) -> Option<Self> {
        match tag {
            COMPRESSED_TAG => Some(ContainerType::Compressed),
            STORED_TAG => Some(ContainerType::Stored),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContainerType::Compressed => "LZFu",
            ContainerType::Stored => "MELA",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

/// The 16-byte header, fields as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Payload length + [`SIZE_FIELD_BIAS`].
    pub compressed_size: u32,
    /// Length of the original data.
    pub raw_size: u32,
    /// Raw type tag; see [`ContainerHeader::container_type`].
    pub tag: [u8; 4],
    /// CRC-32 of the payload, or 0 for stored containers.
    pub checksum: u32,
}

impl ContainerHeader {
    /// Recognised container type, or [`CrtfError::UnknownTypeTag`].
    pub fn container_type(&self) -> Result<ContainerType, CrtfError> {
        ContainerType::from_tag(self.tag).ok_or(CrtfError::UnknownTypeTag(self.tag))
    }

    /// Declared payload length.
    pub fn payload_len(&self) -> Result<usize, CrtfError> {
        (self.compressed_size as usize)
            .checked_sub(SIZE_FIELD_BIAS)
            .ok_or(CrtfError::InvalidSize(self.compressed_size))
    }

    /// Total container length the header declares.
    pub fn container_len(&self) -> Result<usize, CrtfError> {
        Ok(HEADER_SIZE + self.payload_len()?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode options and result
// ─────────────────────────────────────────────────────────────────────────────

/// Knobs for [`decode_with`](crate::frame::decode_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject payloads without an end-of-stream marker and outputs whose
    /// length differs from the header's raw size.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: config::STRICT_DEFAULT,
        }
    }
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Output of [`decode_with`](crate::frame::decode_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub data: Vec<u8>,
    pub container: ContainerType,
    /// How the token stream ended; `None` for stored containers.
    pub termination: Option<Termination>,
    /// Raw size recorded in the header.
    pub declared_size: usize,
}

impl Decoded {
    /// `true` unless the payload ran out before its end-of-stream marker or
    /// the output length disagrees with the header.
    pub fn is_clean(&self) -> bool {
        self.termination != Some(Termination::Exhausted) && self.data.len() == self.declared_size
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Everything that can go wrong while decoding a container.
///
/// All variants are terminal for the call that produced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrtfError {
    #[error("input is {len} bytes; a container header needs 16")]
    TooShort { len: usize },

    #[error("header declares {declared} payload bytes but only {available} are present")]
    TruncatedPayload { declared: usize, available: usize },

    #[error("compressed size field {0} is smaller than the 12 header bytes it must cover")]
    InvalidSize(u32),

    #[error("payload checksum mismatch: header {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("stored container carries non-zero checksum {0:#010x}")]
    InvalidStoredChecksum(u32),

    #[error("unknown container type tag {0:02x?}")]
    UnknownTypeTag([u8; 4]),

    #[error("payload ended without an end-of-stream marker")]
    MissingEndMarker,

    #[error("decoded {actual} bytes but the header declares {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Codec errors surface in the file layer as corrupt input.
impl From<CrtfError> for std::io::Error {
    fn from(e: CrtfError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
