//! Sliding dictionary shared by the encoder and the decoder.
//!
//! Both directions build a fresh [`Dictionary`] per call and feed it the same
//! sequence of committed bytes; every back-reference offset is only meaningful
//! relative to that shared history.

use super::types::{DICT_CAPACITY, DICT_MASK, FILL_BYTE, SEED, SEED_LEN};

/// Fixed-capacity ring buffer preloaded with [`SEED`].
#[derive(Clone)]
pub struct Dictionary {
    buf: Box<[u8; DICT_CAPACITY]>,
    write_offset: usize,
    wrapped: bool,
}

impl Dictionary {
    /// Seeded dictionary with the write cursor just past the seed.
    pub fn new() -> Self {
        let mut buf = Box::new([FILL_BYTE; DICT_CAPACITY]);
        buf[..SEED_LEN].copy_from_slice(SEED);
        Self {
            buf,
            write_offset: SEED_LEN,
            wrapped: false,
        }
    }

    /// Store `byte` at the write cursor and advance it.
    #[inline]
    pub fn commit(&mut self, byte: u8) {
        self.buf[self.write_offset] = byte;
        self.write_offset = (self.write_offset + 1) & DICT_MASK;
        if self.write_offset == 0 {
            self.wrapped = true;
        }
    }

    /// Byte at `offset`, reduced modulo the capacity.
    #[inline]
    pub fn read_at(&self, offset: usize) -> u8 {
        self.buf[offset & DICT_MASK]
    }

    /// Slot the next committed byte will land in.
    #[inline]
    pub fn write_offset(&self) -> usize {
        self.write_offset
    }

    /// `true` once the write cursor has gone all the way around at least once.
    #[inline]
    pub fn has_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Exclusive upper bound for candidate start offsets during a search.
    ///
    /// Before the first wrap only the written region plus the `pending` bytes
    /// speculatively committed by the running search hold history; afterwards
    /// every slot does.
    #[inline]
    pub fn search_extent(&self, write_start: usize, pending: usize) -> usize {
        if self.wrapped {
            DICT_CAPACITY
        } else {
            (write_start + pending).min(DICT_CAPACITY)
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("write_offset", &self.write_offset)
            .field("wrapped", &self.wrapped)
            .finish()
    }
}
