// Integration tests for src/frame/compress.rs: container assembly.

use crtf::checksum::crc32;
use crtf::frame::{decode, encode, encode_as, read_header, ContainerType, HEADER_SIZE};

const REFERENCE_TEXT: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\pard hello world}\r\n";

#[test]
fn reference_text_container() {
    let c = encode(REFERENCE_TEXT, true);
    assert_eq!(c.len(), 49);
    let h = read_header(&c).unwrap();
    assert_eq!(h.compressed_size, 45);
    assert_eq!(h.raw_size, 43);
    assert_eq!(h.checksum, 0xA7C7_C5F1);
}

#[test]
fn header_describes_payload() {
    let src = b"{\\rtf1 \\b bold\\b0  and \\i italic\\i0 }".repeat(40);
    let c = encode(&src, true);
    let h = read_header(&c).unwrap();
    let payload = &c[HEADER_SIZE..];
    assert_eq!(h.compressed_size as usize, payload.len() + 12);
    assert_eq!(h.raw_size as usize, src.len());
    assert_eq!(h.checksum, crc32(payload));
    assert_eq!(h.container_type(), Ok(ContainerType::Compressed));
}

#[test]
fn stored_container_layout() {
    let src = b"plain text, stored as is";
    let c = encode_as(src, ContainerType::Stored);
    assert_eq!(c.len(), HEADER_SIZE + src.len());
    let h = read_header(&c).unwrap();
    assert_eq!(h.compressed_size as usize, src.len() + 12);
    assert_eq!(h.raw_size as usize, src.len());
    assert_eq!(&h.tag, b"MELA");
    assert_eq!(h.checksum, 0);
    assert_eq!(&c[HEADER_SIZE..], src);
}

#[test]
fn empty_stored_container() {
    let c = encode(b"", false);
    assert_eq!(c.len(), HEADER_SIZE);
    assert_eq!(decode(&c).unwrap(), b"");
}

#[test]
fn encode_flag_selects_type() {
    let src = b"abc";
    assert_eq!(encode(src, true), encode_as(src, ContainerType::Compressed));
    assert_eq!(encode(src, false), encode_as(src, ContainerType::Stored));
}

#[test]
fn both_types_roundtrip() {
    let src: Vec<u8> = b"{\\colortbl;\\red255\\green0\\blue0;}\r\n"
        .iter()
        .cycle()
        .take(9000)
        .copied()
        .collect();
    assert_eq!(decode(&encode(&src, true)).unwrap(), src);
    assert_eq!(decode(&encode(&src, false)).unwrap(), src);
}
