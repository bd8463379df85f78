//! Token-stream constants, the preset dictionary, and token types.
//!
//! Covers:
//!   - Window geometry (`DICT_CAPACITY`, `SEED_LEN`) and the preset seed text
//!   - Reference-length bounds (`MIN_MATCH`, `MAX_MATCH`)
//!   - Bit-field layout of a packed reference (`OFFSET_BITS`, `LENGTH_BITS`, …)
//!   - [`Token`]: literal or back-reference, the atomic unit of a payload
//!   - [`MatchResult`]: three-way outcome of a match search

// ─────────────────────────────────────────────────────────────────────────────
// Window geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Capacity of the sliding dictionary in bytes.
pub const DICT_CAPACITY: usize = 4096;

/// Mask reducing any position to a dictionary slot.
pub const DICT_MASK: usize = DICT_CAPACITY - 1;

/// Preset dictionary content loaded before any payload byte.
///
/// RTF boilerplate: the header, font table, colour table and the most common
/// paragraph control words.
pub const SEED: &[u8; 207] = b"{\\rtf1\\ansi\\mac\\deff0\\deftab720{\\fonttbl;}{\\f0\\fnil \\froman \
\\fswiss \\fmodern \\fscript \\fdecor MS Sans SerifSymbolArialTimes New \
RomanCourier{\\colortbl\\red0\\green0\\blue0\r\n\\par \\pard\\plain\\\
f0\\fs20\\b\\i\\u\\tab\\tx";

/// Length of [`SEED`]; also the initial write cursor.
pub const SEED_LEN: usize = SEED.len();

/// Filler byte for the dictionary slots past the seed.
pub const FILL_BYTE: u8 = b' ';

// ─────────────────────────────────────────────────────────────────────────────
// Reference layout: [12-bit offset][4-bit length - MIN_MATCH], big-endian
// ─────────────────────────────────────────────────────────────────────────────

/// Shortest length worth a reference; a single byte is always a literal.
pub const MIN_MATCH: usize = 2;

/// Longest length a 4-bit length field can carry.
pub const MAX_MATCH: usize = MIN_MATCH + LENGTH_MASK as usize;

pub const OFFSET_BITS: u32 = 12;
pub const LENGTH_BITS: u32 = 4;
pub const OFFSET_MASK: u16 = (1u16 << OFFSET_BITS) - 1;
pub const LENGTH_MASK: u16 = (1u16 << LENGTH_BITS) - 1;

/// Tokens described by one control byte.
pub const TOKENS_PER_GROUP: usize = 8;

/// Worst-case size of one group: control byte + eight references.
pub const MAX_GROUP_SIZE: usize = 1 + TOKENS_PER_GROUP * 2;

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// One element of a compressed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A raw byte.
    Literal(u8),
    /// Copy `length` bytes starting at dictionary slot `offset`.
    ///
    /// When `offset` equals the write cursor at the point the token is read,
    /// the token is the end-of-stream marker and `length` is meaningless.
    Reference { offset: u16, length: u8 },
}

impl Token {
    /// Whether this token sets its bit in the control byte.
    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, Token::Reference { .. })
    }

    /// Number of payload bytes the token occupies after the control byte.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Reference { .. } => 2,
        }
    }
}

/// Packs a reference into its 16-bit wire value.
///
/// `length` must already lie in `MIN_MATCH..=MAX_MATCH`; the end-of-stream
/// marker is packed with `length == MIN_MATCH` (length field 0).
#[inline]
pub fn pack_reference(offset: usize, length: usize) -> u16 {
    debug_assert!((MIN_MATCH..=MAX_MATCH).contains(&length));
    (((offset & DICT_MASK) as u16) << LENGTH_BITS) | ((length - MIN_MATCH) as u16 & LENGTH_MASK)
}

/// Splits a 16-bit wire value into `(offset, length)`.
#[inline]
pub fn unpack_reference(value: u16) -> (usize, usize) {
    let offset = ((value >> LENGTH_BITS) & OFFSET_MASK) as usize;
    let length = (value & LENGTH_MASK) as usize + MIN_MATCH;
    (offset, length)
}

// ─────────────────────────────────────────────────────────────────────────────
// Match search outcome
// ─────────────────────────────────────────────────────────────────────────────

/// Result of searching the window for the input at the current index.
///
/// The variant fixes who commits which byte to the dictionary:
///
/// | Variant      | Committed by the search | Caller must commit |
/// |--------------|-------------------------|--------------------|
/// | `NoMatch`    | nothing                 | the literal byte   |
/// | `SingleByte` | the literal byte        | nothing            |
/// | `Reference`  | all `length` bytes      | nothing            |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    SingleByte,
    Reference { offset: usize, length: usize },
}
