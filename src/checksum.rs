//! Thin wrapper around the `crc32fast` crate providing the payload checksum.
//!
//! Compressed-RTF containers use the reflected CRC-32 polynomial (0xEDB88320)
//! but start from 0 and skip the final inversion. `crc32fast` implements the
//! zlib convention (start at !0, invert at the end), so seeding it with `!0`
//! and inverting its result cancels both steps.

use crc32fast::Hasher;

/// Incremental payload checksum.
#[derive(Clone)]
pub struct Crc32State {
    inner: Hasher,
}

impl Crc32State {
    pub fn new() -> Self {
        Self {
            inner: Hasher::new_with_initial(!0),
        }
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    pub fn finalize(self) -> u32 {
        !self.inner.finalize()
    }
}

impl Default for Crc32State {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot checksum of `data`.
///
/// # Parity vectors
/// * `crc32(b"")` == `0`
/// * `crc32` of the 33-byte "hello world" reference payload == `0xA7C7C5F1`
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    let mut state = Crc32State::new();
    state.update(data);
    state.finalize()
}
