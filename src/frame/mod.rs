//! Compressed-RTF container: 16-byte header plus payload.
//!
//! The payload is either an LZ77 token stream ("LZFu", see [`crate::block`])
//! or the raw input ("MELA").

pub mod compress;
pub mod decompress;
pub mod header;
pub mod types;

// Re-export key public API items at the module level.
pub use compress::{encode, encode_as};
pub use decompress::{decode, decode_with};
pub use header::{read_header, write_header};
pub use types::{
    ContainerHeader, ContainerType, CrtfError, DecodeOptions, Decoded, COMPRESSED_TAG,
    HEADER_SIZE, STORED_TAG,
};
