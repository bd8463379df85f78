#![no_main]
use libfuzzer_sys::fuzz_target;

use crtf::checksum::crc32;
use crtf::frame::{decode, decode_with, DecodeOptions, HEADER_SIZE};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes: errors are fine, panics are not.
    let _ = decode(data);
    let _ = decode_with(data, &DecodeOptions::strict());

    // Patch in a matching checksum so the token decoder is reached as well.
    if data.len() >= HEADER_SIZE {
        let mut patched = data.to_vec();
        patched[0..4].copy_from_slice(&((data.len() - HEADER_SIZE + 12) as u32).to_le_bytes());
        patched[8..12].copy_from_slice(b"LZFu");
        let crc = crc32(&patched[HEADER_SIZE..]);
        patched[12..16].copy_from_slice(&crc.to_le_bytes());
        let lenient = decode(&patched);
        assert!(lenient.is_ok(), "a well-framed container must decode leniently");
    }
});
