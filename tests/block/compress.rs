// Integration tests for src/block/compress.rs: payload encoder output and
// agreement with the payload decoder.

use crtf::block::{
    compress_bound, compress_payload, decompress_payload, tokens, Termination, Token,
    DICT_CAPACITY, SEED_LEN,
};

const REFERENCE_TEXT: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\pard hello world}\r\n";

fn rtf_body(len: usize) -> Vec<u8> {
    b"{\\pard\\plain\\f0\\fs20 Lorem ipsum dolor sit amet, consectetur adipiscing elit.\\par}\r\n"
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}

fn pseudo_random(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed as u8
        })
        .collect()
}

fn roundtrip(src: &[u8]) {
    let payload = compress_payload(src);
    assert!(payload.len() <= compress_bound(src.len()));
    let (out, term) = decompress_payload(&payload, src.len());
    assert_eq!(term, Termination::Sentinel);
    assert_eq!(out, src);
}

#[test]
fn reference_text_payload_is_exact() {
    let payload = compress_payload(REFERENCE_TEXT);
    assert_eq!(payload.len(), 33);
    assert_eq!(&payload[..4], &[0x03, 0x00, 0x0a, 0x00]);
    assert_eq!(&payload[payload.len() - 3..], &[0x80, 0x0f, 0xa0]);
}

#[test]
fn roundtrip_small_inputs() {
    roundtrip(b"");
    roundtrip(b"a");
    roundtrip(b"{");
    roundtrip(b"\\par");
    roundtrip(REFERENCE_TEXT);
}

#[test]
fn roundtrip_across_dictionary_wrap() {
    roundtrip(&rtf_body(DICT_CAPACITY * 3 + 17));
}

#[test]
fn roundtrip_incompressible() {
    roundtrip(&pseudo_random(10_000, 0x9E37_79B9));
}

#[test]
fn roundtrip_long_runs() {
    roundtrip(&vec![0u8; 5000]);
    roundtrip(&vec![b' '; DICT_CAPACITY + 1]);
}

#[test]
fn repetitive_text_shrinks() {
    let src = rtf_body(8192);
    assert!(compress_payload(&src).len() < src.len() / 3);
}

#[test]
fn end_marker_is_the_last_token() {
    let src = rtf_body(1000);
    let payload = compress_payload(&src);
    let all: Vec<Token> = tokens(&payload).collect();

    let mut cursor = SEED_LEN;
    for (i, tok) in all.iter().enumerate() {
        let is_last = i + 1 == all.len();
        match *tok {
            Token::Literal(_) => {
                assert!(!is_last);
                cursor = (cursor + 1) % DICT_CAPACITY;
            }
            Token::Reference { offset, length } => {
                assert_eq!(offset as usize == cursor, is_last, "token {}", i);
                cursor = (cursor + length as usize) % DICT_CAPACITY;
            }
        }
    }
}
