//! Token-stream encoder: turns raw bytes into a compressed payload.
//!
//! The payload is a sequence of groups, each a control byte followed by up to
//! eight tokens (bit *i* of the control byte set = token *i* is a reference).
//! The stream always ends with the end-of-stream reference, whose offset is the
//! write cursor at the moment it is emitted.

use super::dict::Dictionary;
use super::search::find_longest_match;
use super::types::{pack_reference, MatchResult, Token, MAX_GROUP_SIZE, MIN_MATCH, TOKENS_PER_GROUP};

// ─────────────────────────────────────────────────────────────────────────────
// Token group
// ─────────────────────────────────────────────────────────────────────────────

/// Up to eight tokens waiting for their control byte.
#[derive(Debug, Clone)]
pub struct TokenGroup {
    control: u8,
    count: usize,
    bytes: [u8; MAX_GROUP_SIZE - 1],
    len: usize,
}

impl TokenGroup {
    pub const fn new() -> Self {
        Self {
            control: 0,
            count: 0,
            bytes: [0; MAX_GROUP_SIZE - 1],
            len: 0,
        }
    }

    /// Append `token`; the caller flushes once [`is_full`](Self::is_full).
    pub fn push(&mut self, token: Token) {
        debug_assert!(!self.is_full());
        match token {
            Token::Literal(byte) => {
                self.bytes[self.len] = byte;
                self.len += 1;
            }
            Token::Reference { offset, length } => {
                self.control |= 1 << self.count;
                let packed = pack_reference(offset as usize, length as usize);
                self.bytes[self.len..self.len + 2].copy_from_slice(&packed.to_be_bytes());
                self.len += 2;
            }
        }
        self.count += 1;
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == TOKENS_PER_GROUP
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Emit `[control, tokens...]` into `out` and reset. No-op when empty.
    pub fn flush_into(&mut self, out: &mut Vec<u8>) {
        if self.is_empty() {
            return;
        }
        out.push(self.control);
        out.extend_from_slice(&self.bytes[..self.len]);
        *self = Self::new();
    }
}

impl Default for TokenGroup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payload encoder
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case payload size for `src_len` input bytes: every byte a literal,
/// plus the 2-byte end marker, plus one control byte per eight tokens.
pub fn compress_bound(src_len: usize) -> usize {
    let tokens = src_len + 1;
    src_len + 2 + tokens.div_ceil(TOKENS_PER_GROUP)
}

/// Compress `src` into a token-group payload (no container header).
pub fn compress_payload(src: &[u8]) -> Vec<u8> {
    let mut dict = Dictionary::new();
    let mut out = Vec::with_capacity(compress_bound(src.len()) / 2 + MAX_GROUP_SIZE);
    let mut group = TokenGroup::new();
    let mut pos = 0usize;

    loop {
        if pos >= src.len() {
            group.push(end_marker(&dict));
            group.flush_into(&mut out);
            break;
        }

        let token = match find_longest_match(&mut dict, src, pos) {
            MatchResult::Reference { offset, length } => {
                debug_assert!(length >= MIN_MATCH);
                pos += length;
                Token::Reference {
                    offset: offset as u16,
                    length: length as u8,
                }
            }
            MatchResult::SingleByte => {
                let byte = src[pos];
                pos += 1;
                Token::Literal(byte)
            }
            MatchResult::NoMatch => {
                let byte = src[pos];
                dict.commit(byte);
                pos += 1;
                Token::Literal(byte)
            }
        };

        group.push(token);
        if group.is_full() {
            group.flush_into(&mut out);
        }
    }

    out
}

/// The end-of-stream reference for the dictionary's current state.
#[inline]
fn end_marker(dict: &Dictionary) -> Token {
    Token::Reference {
        offset: dict.write_offset() as u16,
        length: MIN_MATCH as u8,
    }
}
