// Integration tests for src/frame/header.rs and the header type.

use crtf::frame::{
    read_header, write_header, ContainerHeader, ContainerType, CrtfError, COMPRESSED_TAG,
    HEADER_SIZE, STORED_TAG,
};

const REFERENCE_HEADER: [u8; 16] = [
    0x2d, 0x00, 0x00, 0x00, 0x2b, 0x00, 0x00, 0x00, 0x4c, 0x5a, 0x46, 0x75, 0xf1, 0xc5, 0xc7,
    0xa7,
];

#[test]
fn reference_header_fields() {
    let h = read_header(&REFERENCE_HEADER).unwrap();
    assert_eq!(h.compressed_size, 45);
    assert_eq!(h.raw_size, 43);
    assert_eq!(h.tag, COMPRESSED_TAG);
    assert_eq!(h.checksum, 0xA7C7_C5F1);
    assert_eq!(h.container_type(), Ok(ContainerType::Compressed));
    assert_eq!(h.payload_len(), Ok(33));
    assert_eq!(h.container_len(), Ok(49));
}

#[test]
fn write_then_read_is_identity() {
    let h = ContainerHeader {
        compressed_size: 0x0102_0304,
        raw_size: 7,
        tag: STORED_TAG,
        checksum: 0,
    };
    let bytes = write_header(&h);
    assert_eq!(bytes.len(), HEADER_SIZE);
    assert_eq!(&bytes[..4], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[8..12], b"MELA");
    assert_eq!(read_header(&bytes), Ok(h));
}

#[test]
fn extra_bytes_are_not_read() {
    let mut src = REFERENCE_HEADER.to_vec();
    src.extend_from_slice(&[0xFF; 40]);
    assert_eq!(read_header(&src), read_header(&REFERENCE_HEADER));
}

#[test]
fn fifteen_bytes_is_too_short() {
    assert_eq!(
        read_header(&REFERENCE_HEADER[..15]),
        Err(CrtfError::TooShort { len: 15 })
    );
    assert_eq!(read_header(&[]), Err(CrtfError::TooShort { len: 0 }));
}

#[test]
fn unknown_tag_is_reported_raw() {
    let mut bytes = REFERENCE_HEADER;
    bytes[8..12].copy_from_slice(b"ABCD");
    let h = read_header(&bytes).unwrap();
    assert_eq!(h.container_type(), Err(CrtfError::UnknownTypeTag(*b"ABCD")));
}

#[test]
fn size_below_bias_is_invalid() {
    let mut bytes = REFERENCE_HEADER;
    bytes[..4].copy_from_slice(&11u32.to_le_bytes());
    let h = read_header(&bytes).unwrap();
    assert_eq!(h.payload_len(), Err(CrtfError::InvalidSize(11)));
}

#[test]
fn tags_map_to_types() {
    assert_eq!(ContainerType::from_tag(*b"LZFu"), Some(ContainerType::Compressed));
    assert_eq!(ContainerType::from_tag(*b"MELA"), Some(ContainerType::Stored));
    assert_eq!(ContainerType::from_tag(*b"lzfu"), None);
    assert_eq!(ContainerType::Compressed.tag(), COMPRESSED_TAG);
}
