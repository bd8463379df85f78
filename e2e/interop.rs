//! Interoperability tests against published compressed-RTF containers.
//!
//! The reference container below is the worked example other LZFu readers and
//! writers are checked against. Beyond the fixed vectors, encoder output for
//! larger inputs is cross-checked with a small independent decoder written
//! directly from the wire format, so agreement does not rest on the crate's
//! own decoder alone.

use crtf::checksum::crc32;
use crtf::frame::{decode, decode_with, encode, read_header, DecodeOptions, HEADER_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

const REFERENCE_TEXT: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\pard hello world}\r\n";

const REFERENCE_CONTAINER: [u8; 49] = [
    // header: compressed size 45, raw size 43, "LZFu", CRC 0xA7C7C5F1
    0x2d, 0x00, 0x00, 0x00, 0x2b, 0x00, 0x00, 0x00, 0x4c, 0x5a, 0x46, 0x75, 0xf1, 0xc5, 0xc7,
    0xa7, //
    // payload
    0x03, 0x00, 0x0a, 0x00, 0x72, 0x63, 0x70, 0x67, 0x31, 0x32, 0x35, 0x42, 0x32, 0x0a, 0xf3,
    0x20, 0x68, 0x65, 0x6c, 0x09, 0x00, 0x20, 0x62, 0x77, 0x05, 0xb0, 0x6c, 0x64, 0x7d, 0x0a,
    0x80, 0x0f, 0xa0,
];

const SEED_TEXT: &[u8] = b"{\\rtf1\\ansi\\mac\\deff0\\deftab720{\\fonttbl;}{\\f0\\fnil \\froman \
\\fswiss \\fmodern \\fscript \\fdecor MS Sans SerifSymbolArialTimes New RomanCourier\
{\\colortbl\\red0\\green0\\blue0\r\n\\par \\pard\\plain\\f0\\fs20\\b\\i\\u\\tab\\tx";

/// Decoder written straight from the wire format: 4096-byte ring preloaded
/// with the seed text and spaces, cursor at the end of the seed.
fn independent_decode(container: &[u8]) -> Vec<u8> {
    let comp = u32::from_le_bytes(container[0..4].try_into().unwrap()) as usize;
    let payload = &container[16..16 + comp - 12];

    let mut ring = vec![b' '; 4096];
    ring[..SEED_TEXT.len()].copy_from_slice(SEED_TEXT);
    let mut cursor = SEED_TEXT.len();
    let mut out = Vec::new();

    let mut i = 0;
    'groups: while i < payload.len() {
        let flags = payload[i];
        i += 1;
        for bit in 0..8 {
            if i >= payload.len() {
                break 'groups;
            }
            if flags & (1 << bit) == 0 {
                ring[cursor] = payload[i];
                out.push(payload[i]);
                cursor = (cursor + 1) % 4096;
                i += 1;
            } else {
                let word = u16::from_be_bytes([payload[i], payload[i + 1]]) as usize;
                i += 2;
                let offset = word >> 4;
                let length = (word & 0xF) + 2;
                if offset == cursor {
                    break 'groups;
                }
                for k in 0..length {
                    let b = ring[(offset + k) % 4096];
                    ring[cursor] = b;
                    out.push(b);
                    cursor = (cursor + 1) % 4096;
                }
            }
        }
    }
    out
}

fn synthetic_corpus() -> Vec<u8> {
    let mut s = String::new();
    for i in 0..400 {
        s.push_str(&format!(
            "{{\\pard\\plain\\f{}\\fs{} Paragraph {} of the message body.\\par}}\r\n",
            i % 3,
            18 + (i % 5) * 2,
            i
        ));
    }
    s.into_bytes()
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reference_container_decodes_exactly() {
    assert_eq!(decode(&REFERENCE_CONTAINER).unwrap(), REFERENCE_TEXT);
    let d = decode_with(&REFERENCE_CONTAINER, &DecodeOptions::strict()).unwrap();
    assert!(d.is_clean());
}

#[test]
fn reference_text_encodes_byte_for_byte() {
    assert_eq!(encode(REFERENCE_TEXT, true), REFERENCE_CONTAINER);
}

#[test]
fn reference_checksum() {
    assert_eq!(crc32(&REFERENCE_CONTAINER[HEADER_SIZE..]), 0xA7C7_C5F1);
}

#[test]
fn seed_text_matches_the_dictionary_preload() {
    assert_eq!(SEED_TEXT.len(), 207);
    assert_eq!(&SEED_TEXT[..], &crtf::block::SEED[..]);
}

#[test]
fn seed_prefix_is_tiny() {
    let text = b"{\\rtf1\\ansi\\mac\\deff0\\deftab720";
    let c = encode(text, true);
    assert_eq!(c.len(), HEADER_SIZE + 7);
    assert_eq!(read_header(&c).unwrap().checksum, 0xD4FE_5BD8);
    assert_eq!(decode(&c).unwrap(), text);
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-checks with the independent decoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn independent_decoder_agrees_on_reference() {
    assert_eq!(independent_decode(&REFERENCE_CONTAINER), REFERENCE_TEXT);
}

#[test]
fn encoder_output_is_readable_by_independent_decoder() {
    let corpus = synthetic_corpus();
    assert!(corpus.len() > 4 * 4096);
    let c = encode(&corpus, true);
    assert_eq!(independent_decode(&c), corpus);
    assert_eq!(decode(&c).unwrap(), corpus);
}

#[test]
fn whole_seed_as_input() {
    let c = encode(SEED_TEXT, true);
    assert_eq!(independent_decode(&c), SEED_TEXT);
    // Twelve maximal references and one three-byte reference.
    assert!(c.len() < HEADER_SIZE + 40);
}

#[test]
fn binary_data_across_wrap() {
    let data: Vec<u8> = (0..9000u32).map(|i| (i.wrapping_mul(2654435761) >> 24) as u8).collect();
    let c = encode(&data, true);
    assert_eq!(independent_decode(&c), data);
}
