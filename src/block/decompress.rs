//! Token-stream decoder: rebuilds raw bytes from a compressed payload.
//!
//! # Termination
//!
//! A well-formed payload ends with the end-of-stream reference. Older writers
//! have been seen to stop short of it, so running out of payload bytes is not
//! an error here; it is reported as [`Termination::Exhausted`] and the caller
//! decides whether to accept it.

use super::dict::Dictionary;
use super::types::{unpack_reference, Token, TOKENS_PER_GROUP};

/// How a payload walk came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The end-of-stream reference was read.
    Sentinel,
    /// The payload ran out first (possibly in the middle of a token).
    Exhausted,
}

// ─────────────────────────────────────────────────────────────────────────────
// Token reader
// ─────────────────────────────────────────────────────────────────────────────

/// Splits a payload into tokens without interpreting references.
///
/// Yields tokens in stream order and stops at the end of the payload. A token
/// cut short by the end of input is dropped and [`truncated`](Self::truncated)
/// reports it. The reader knows nothing about the write cursor, so the
/// end-of-stream reference comes out as an ordinary [`Token::Reference`].
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    src: &'a [u8],
    pos: usize,
    control: u8,
    pending_bits: usize,
    truncated: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            pos: 0,
            control: 0,
            pending_bits: 0,
            truncated: false,
        }
    }

    /// Payload bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// `true` if the last token was cut off by the end of the payload.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.src.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}

impl Iterator for TokenReader<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pending_bits == 0 {
            self.control = self.read_byte()?;
            self.pending_bits = TOKENS_PER_GROUP;
        }
        let is_reference = self.control & 1 != 0;
        self.control >>= 1;
        self.pending_bits -= 1;

        if is_reference {
            let pair = self.src.get(self.pos..self.pos + 2);
            let Some(&[hi, lo]) = pair else {
                self.truncated = self.pos < self.src.len();
                self.pos = self.src.len();
                return None;
            };
            self.pos += 2;
            let (offset, length) = unpack_reference(u16::from_be_bytes([hi, lo]));
            Some(Token::Reference {
                offset: offset as u16,
                length: length as u8,
            })
        } else {
            self.read_byte().map(Token::Literal)
        }
    }
}

/// Token view of `payload`.
pub fn tokens(payload: &[u8]) -> TokenReader<'_> {
    TokenReader::new(payload)
}

// ─────────────────────────────────────────────────────────────────────────────
// Payload decoder
// ─────────────────────────────────────────────────────────────────────────────

/// Decode a token-group payload (no container header).
///
/// `size_hint` only pre-sizes the output buffer.
pub fn decompress_payload(payload: &[u8], size_hint: usize) -> (Vec<u8>, Termination) {
    let mut dict = Dictionary::new();
    let mut out = Vec::with_capacity(size_hint);

    for token in TokenReader::new(payload) {
        match token {
            Token::Literal(byte) => {
                out.push(byte);
                dict.commit(byte);
            }
            Token::Reference { offset, length } => {
                let offset = offset as usize;
                if offset == dict.write_offset() {
                    return (out, Termination::Sentinel);
                }
                // Source slots advance with `j`; the cursor moves independently.
                for j in 0..length as usize {
                    let byte = dict.read_at(offset + j);
                    out.push(byte);
                    dict.commit(byte);
                }
            }
        }
    }

    (out, Termination::Exhausted)
}
