// Integration tests for src/block/decompress.rs: token reader and payload
// decoder, driven by hand-assembled payloads.

use crtf::block::{decompress_payload, tokens, Termination, Token, TokenReader};

const REFERENCE_TEXT: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\pard hello world}\r\n";

const REFERENCE_PAYLOAD: [u8; 33] = [
    0x03, 0x00, 0x0a, 0x00, 0x72, 0x63, 0x70, 0x67, 0x31, 0x32, 0x35, 0x42, 0x32, 0x0a, 0xf3,
    0x20, 0x68, 0x65, 0x6c, 0x09, 0x00, 0x20, 0x62, 0x77, 0x05, 0xb0, 0x6c, 0x64, 0x7d, 0x0a,
    0x80, 0x0f, 0xa0,
];

#[test]
fn reference_payload_decodes() {
    let (out, term) = decompress_payload(&REFERENCE_PAYLOAD, REFERENCE_TEXT.len());
    assert_eq!(out, REFERENCE_TEXT);
    assert_eq!(term, Termination::Sentinel);
}

#[test]
fn lone_end_marker_is_empty_output() {
    let (out, term) = decompress_payload(&[0x01, 0x0C, 0xF0], 0);
    assert!(out.is_empty());
    assert_eq!(term, Termination::Sentinel);
}

#[test]
fn bytes_after_end_marker_are_ignored() {
    let (out, term) = decompress_payload(&[0x01, 0x0C, 0xF0, 0xAA, 0xBB], 0);
    assert!(out.is_empty());
    assert_eq!(term, Termination::Sentinel);
}

#[test]
fn reference_into_seed() {
    // Offset 0, length field 4 (six bytes): "{\rtf1".
    let (out, term) = decompress_payload(&[0x01, 0x00, 0x04], 0);
    assert_eq!(out, b"{\\rtf1");
    assert_eq!(term, Termination::Exhausted);
}

#[test]
fn self_overlapping_copy_repeats_the_last_byte() {
    // Literal 'x' at slot 207, reference to slot 207 length 5, end marker at 213.
    let payload = [0x06, b'x', 0x0C, 0xF3, 0x0D, 0x50];
    let (out, term) = decompress_payload(&payload, 0);
    assert_eq!(out, b"xxxxxx");
    assert_eq!(term, Termination::Sentinel);
}

#[test]
fn missing_end_marker_is_exhausted() {
    let (out, term) = decompress_payload(&[0x00, b'a', b'b'], 0);
    assert_eq!(out, b"ab");
    assert_eq!(term, Termination::Exhausted);
}

#[test]
fn empty_payload_is_exhausted() {
    let (out, term) = decompress_payload(&[], 0);
    assert!(out.is_empty());
    assert_eq!(term, Termination::Exhausted);
}

#[test]
fn half_reference_is_dropped() {
    let (out, term) = decompress_payload(&[0x02, b'q', 0x0C], 0);
    assert_eq!(out, b"q");
    assert_eq!(term, Termination::Exhausted);

    let mut reader = TokenReader::new(&[0x02, b'q', 0x0C]);
    assert_eq!(reader.next(), Some(Token::Literal(b'q')));
    assert_eq!(reader.next(), None);
    assert!(reader.truncated());
    assert_eq!(reader.position(), 3);
}

#[test]
fn token_view_of_seed_prefix_payload() {
    let all: Vec<Token> = tokens(&[0x07, 0x00, 0x0F, 0x01, 0x1C, 0x0E, 0xE0]).collect();
    assert_eq!(
        all,
        vec![
            Token::Reference { offset: 0, length: 17 },
            Token::Reference { offset: 17, length: 14 },
            Token::Reference { offset: 238, length: 2 },
        ]
    );
}

#[test]
fn control_bits_are_read_lsb_first() {
    // 0b0000_0010: literal, reference, then literals.
    let all: Vec<Token> = tokens(&[0x02, b'a', 0x00, 0x04, b'b']).collect();
    assert_eq!(
        all,
        vec![
            Token::Literal(b'a'),
            Token::Reference { offset: 0, length: 6 },
            Token::Literal(b'b'),
        ]
    );
}

#[test]
fn clean_end_is_not_truncated() {
    let mut reader = tokens(&[0x00, b'a']);
    assert_eq!(reader.next(), Some(Token::Literal(b'a')));
    assert_eq!(reader.next(), None);
    assert!(!reader.truncated());
}
