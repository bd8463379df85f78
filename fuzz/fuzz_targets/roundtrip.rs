#![no_main]
use libfuzzer_sys::fuzz_target;

use crtf::frame::{decode_with, encode, DecodeOptions};

fuzz_target!(|data: &[u8]| {
    for compressed in [true, false] {
        let container = encode(data, compressed);
        let decoded = match decode_with(&container, &DecodeOptions::strict()) {
            Ok(d) => d,
            Err(e) => panic!(
                "round-trip: own container rejected ({} bytes in, compressed={}): {}",
                data.len(),
                compressed,
                e
            ),
        };
        assert_eq!(
            decoded.data, data,
            "round-trip mismatch: {} bytes in, {} bytes back",
            data.len(),
            decoded.data.len()
        );
    }
});
