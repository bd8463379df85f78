//! Compressed-RTF token engine.
//!
//! This module contains the LZ77 core shared by both directions: the seeded
//! sliding dictionary, the match search, and the token-group payload encoder
//! and decoder. Container framing lives in [`crate::frame`].

pub mod compress;
pub mod decompress;
pub mod dict;
pub mod search;
pub mod types;

// Re-export the most important public API items at the module level.
pub use compress::{compress_bound, compress_payload, TokenGroup};
pub use decompress::{decompress_payload, tokens, Termination, TokenReader};
pub use dict::Dictionary;
pub use search::find_longest_match;
pub use types::{MatchResult, Token, DICT_CAPACITY, MAX_MATCH, MIN_MATCH, SEED, SEED_LEN};
