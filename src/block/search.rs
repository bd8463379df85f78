//! Greedy longest-match search over the sliding dictionary.
//!
//! The search works on the *decoder's* view of the window. While a reference
//! is being copied the decoder overwrites slots `write_offset..` with the bytes
//! it produces, so a candidate that runs into that region must compare against
//! the input itself (the overlapping-copy case).
//!
//! Every time the best length grows, the newly covered input bytes are
//! committed to the dictionary immediately. When the search returns, the
//! dictionary therefore already holds exactly what the decoder will hold after
//! replaying the chosen token. Slots that were overwritten speculatively but
//! that the decoder has not reached yet at a given copy step keep their prior
//! content in a small side buffer.

use super::dict::Dictionary;
use super::types::{MatchResult, DICT_MASK, MAX_MATCH};

/// Find the longest admissible back-reference for `input[pos..]`.
///
/// Candidates are scanned in increasing offset order; the first offset that
/// reaches a length is kept and only a strictly longer match replaces it. The
/// slot at the write cursor is never a candidate because a reference to it is
/// the end-of-stream marker.
///
/// Commit responsibility is described on [`MatchResult`]. An exhausted input
/// yields [`MatchResult::NoMatch`] without touching the dictionary.
pub fn find_longest_match(dict: &mut Dictionary, input: &[u8], pos: usize) -> MatchResult {
    let remaining = input.get(pos..).unwrap_or(&[]);
    if remaining.is_empty() {
        return MatchResult::NoMatch;
    }

    let start = dict.write_offset();
    let limit = remaining.len().min(MAX_MATCH);

    // Prior content of the slots committed during this search.
    let mut displaced = [0u8; MAX_MATCH];
    let mut best_len = 0usize;
    let mut best_offset = 0usize;

    let mut candidate = 0usize;
    while candidate < dict.search_extent(start, best_len) {
        if candidate != start {
            let len = extend_candidate(dict, remaining, start, candidate, best_len, &displaced, limit);
            if len > best_len {
                for (k, &byte) in remaining.iter().enumerate().take(len).skip(best_len) {
                    displaced[k] = dict.read_at(start + k);
                    dict.commit(byte);
                }
                best_len = len;
                best_offset = candidate;
                if best_len == limit {
                    break;
                }
            }
        }
        candidate += 1;
    }

    match best_len {
        0 => MatchResult::NoMatch,
        1 => MatchResult::SingleByte,
        length => MatchResult::Reference {
            offset: best_offset,
            length,
        },
    }
}

/// Length of the match starting at dictionary slot `candidate`, capped at `limit`.
///
/// `committed` is the number of bytes already speculatively written at
/// `start..`; `displaced` holds what those slots contained before.
#[inline]
fn extend_candidate(
    dict: &Dictionary,
    remaining: &[u8],
    start: usize,
    candidate: usize,
    committed: usize,
    displaced: &[u8; MAX_MATCH],
    limit: usize,
) -> usize {
    let mut len = 0usize;
    while len < limit {
        let slot = (candidate + len) & DICT_MASK;
        // Distance of `slot` past the write cursor, in decoder output order.
        let ahead = slot.wrapping_sub(start) & DICT_MASK;
        let byte = if ahead < len {
            remaining[ahead]
        } else if ahead < committed {
            displaced[ahead]
        } else {
            dict.read_at(slot)
        };
        if byte != remaining[len] {
            break;
        }
        len += 1;
    }
    len
}
