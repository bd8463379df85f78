// Integration tests for src/frame/decompress.rs: validation order, lenient
// and strict modes.

use crtf::block::Termination;
use crtf::checksum::crc32;
use crtf::frame::{
    decode, decode_with, encode, write_header, ContainerHeader, ContainerType, CrtfError,
    DecodeOptions, COMPRESSED_TAG, STORED_TAG,
};

const REFERENCE_TEXT: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\pard hello world}\r\n";

/// Wrap `payload` in an "LZFu" header with a correct checksum.
fn compressed_container(payload: &[u8], raw_size: u32) -> Vec<u8> {
    let header = ContainerHeader {
        compressed_size: payload.len() as u32 + 12,
        raw_size,
        tag: COMPRESSED_TAG,
        checksum: crc32(payload),
    };
    let mut out = write_header(&header).to_vec();
    out.extend_from_slice(payload);
    out
}

#[test]
fn reference_container_decodes_in_both_modes() {
    let c = encode(REFERENCE_TEXT, true);
    assert_eq!(decode(&c).unwrap(), REFERENCE_TEXT);

    let d = decode_with(&c, &DecodeOptions::strict()).unwrap();
    assert_eq!(d.data, REFERENCE_TEXT);
    assert_eq!(d.container, ContainerType::Compressed);
    assert_eq!(d.termination, Some(Termination::Sentinel));
    assert!(d.is_clean());
}

#[test]
fn trailing_bytes_after_declared_payload_are_ignored() {
    let mut c = encode(REFERENCE_TEXT, true);
    c.extend_from_slice(b"junk");
    assert_eq!(decode(&c).unwrap(), REFERENCE_TEXT);
}

#[test]
fn short_input() {
    assert_eq!(decode(b"LZFu"), Err(CrtfError::TooShort { len: 4 }));
}

#[test]
fn truncated_payload() {
    let c = encode(REFERENCE_TEXT, true);
    assert_eq!(
        decode(&c[..c.len() - 1]),
        Err(CrtfError::TruncatedPayload { declared: 33, available: 32 })
    );
}

#[test]
fn truncation_is_reported_before_the_tag() {
    let mut c = encode(REFERENCE_TEXT, true);
    c[8..12].copy_from_slice(b"XXXX");
    c.truncate(20);
    assert!(matches!(decode(&c), Err(CrtfError::TruncatedPayload { .. })));
}

#[test]
fn unknown_tag() {
    let mut c = encode(REFERENCE_TEXT, true);
    c[8..12].copy_from_slice(b"XXXX");
    assert_eq!(decode(&c), Err(CrtfError::UnknownTypeTag(*b"XXXX")));
}

#[test]
fn size_field_below_bias() {
    let mut c = encode(REFERENCE_TEXT, true);
    c[..4].copy_from_slice(&4u32.to_le_bytes());
    assert_eq!(decode(&c), Err(CrtfError::InvalidSize(4)));
}

#[test]
fn corrupt_payload_fails_checksum() {
    let mut c = encode(REFERENCE_TEXT, true);
    c[20] ^= 0x40;
    match decode(&c) {
        Err(CrtfError::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, 0xA7C7_C5F1);
            assert_ne!(actual, expected);
        }
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn stored_container_with_checksum_is_rejected() {
    let mut c = encode(b"abc", false);
    c[12] = 1;
    assert_eq!(decode(&c), Err(CrtfError::InvalidStoredChecksum(1)));
}

#[test]
fn stored_raw_size_larger_than_payload() {
    let mut c = encode(b"abc", false);
    c[4..8].copy_from_slice(&4u32.to_le_bytes());
    assert_eq!(
        decode(&c),
        Err(CrtfError::TruncatedPayload { declared: 4, available: 3 })
    );
}

#[test]
fn stored_raw_size_smaller_than_payload_truncates_output() {
    let header = ContainerHeader {
        compressed_size: 12 + 5,
        raw_size: 2,
        tag: STORED_TAG,
        checksum: 0,
    };
    let mut c = write_header(&header).to_vec();
    c.extend_from_slice(b"hello");
    let d = decode_with(&c, &DecodeOptions::strict()).unwrap();
    assert_eq!(d.data, b"he");
    assert_eq!(d.termination, None);
}

#[test]
fn missing_end_marker_lenient_and_strict() {
    let c = compressed_container(&[0x00, b'a', b'b'], 2);

    let d = decode_with(&c, &DecodeOptions::lenient()).unwrap();
    assert_eq!(d.data, b"ab");
    assert_eq!(d.termination, Some(Termination::Exhausted));
    assert!(!d.is_clean());

    assert_eq!(
        decode_with(&c, &DecodeOptions::strict()),
        Err(CrtfError::MissingEndMarker)
    );
}

#[test]
fn raw_size_mismatch_lenient_and_strict() {
    let c = compressed_container(&[0x01, 0x0C, 0xF0], 10);

    let d = decode_with(&c, &DecodeOptions::lenient()).unwrap();
    assert!(d.data.is_empty());
    assert_eq!(d.declared_size, 10);
    assert!(!d.is_clean());

    assert_eq!(
        decode_with(&c, &DecodeOptions::strict()),
        Err(CrtfError::SizeMismatch { expected: 10, actual: 0 })
    );
}

#[test]
fn huge_declared_raw_size_does_not_preallocate() {
    let c = compressed_container(&[0x01, 0x0C, 0xF0], u32::MAX);
    assert_eq!(decode(&c).unwrap(), b"");
}

#[test]
fn errors_convert_to_invalid_data() {
    let err: std::io::Error = decode(b"").unwrap_err().into();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
