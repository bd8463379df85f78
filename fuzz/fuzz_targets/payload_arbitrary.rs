#![no_main]
use libfuzzer_sys::fuzz_target;

use crtf::block::{decompress_payload, tokens, Token, MAX_MATCH};

fuzz_target!(|data: &[u8]| {
    let (out, _) = decompress_payload(data, data.len());

    // Output can never exceed what the tokens describe.
    let bound: usize = tokens(data)
        .map(|t| match t {
            Token::Literal(_) => 1,
            Token::Reference { length, .. } => length as usize,
        })
        .sum();
    assert!(out.len() <= bound);
    assert!(out.len() <= data.len() * MAX_MATCH);
});
