// Integration tests for src/block/search.rs: longest-match search and its
// dictionary side effects.

use crtf::block::{find_longest_match, Dictionary, MatchResult, MAX_MATCH, SEED_LEN};

#[test]
fn whole_seed_prefix_is_capped_at_max_match() {
    let mut d = Dictionary::new();
    let input = b"{\\rtf1\\ansi\\mac\\deff0\\deftab720";
    let m = find_longest_match(&mut d, input, 0);
    assert_eq!(m, MatchResult::Reference { offset: 0, length: MAX_MATCH });
    assert_eq!(d.write_offset(), SEED_LEN + MAX_MATCH);
}

#[test]
fn search_commits_exactly_the_matched_bytes() {
    let mut d = Dictionary::new();
    let input = b"\\ansi";
    let m = find_longest_match(&mut d, input, 0);
    let MatchResult::Reference { length, .. } = m else {
        panic!("expected a reference, got {:?}", m);
    };
    assert_eq!(length, input.len());
    for (k, &b) in input.iter().enumerate() {
        assert_eq!(d.read_at(SEED_LEN + k), b);
    }
}

#[test]
fn single_known_byte_is_committed_by_the_search() {
    // `{` followed by a byte absent from the seed.
    let mut d = Dictionary::new();
    let m = find_longest_match(&mut d, &[b'{', 0xFF], 0);
    assert_eq!(m, MatchResult::SingleByte);
    assert_eq!(d.write_offset(), SEED_LEN + 1);
    assert_eq!(d.read_at(SEED_LEN), b'{');
}

#[test]
fn absent_byte_is_no_match() {
    let mut d = Dictionary::new();
    assert_eq!(find_longest_match(&mut d, &[0x00], 0), MatchResult::NoMatch);
    assert_eq!(d.write_offset(), SEED_LEN);
}

#[test]
fn exhausted_input_is_no_match() {
    let mut d = Dictionary::new();
    assert_eq!(find_longest_match(&mut d, b"abc", 3), MatchResult::NoMatch);
    assert_eq!(d.write_offset(), SEED_LEN);
}

#[test]
fn write_cursor_is_never_a_candidate() {
    let mut d = Dictionary::new();
    for _ in 0..3 {
        d.commit(0x01);
    }
    let cursor = d.write_offset();
    let m = find_longest_match(&mut d, &[0x01, 0x01, 0x01, 0x01], 0);
    match m {
        MatchResult::Reference { offset, length } => {
            assert_ne!(offset, cursor);
            assert!(length >= 2);
        }
        other => panic!("expected a reference, got {:?}", other),
    }
}

#[test]
fn overlapping_run_extends_past_the_cursor() {
    // One committed 0x01 lets a run of seventeen match as a self-overlapping copy.
    let mut d = Dictionary::new();
    d.commit(0x01);
    let input = [0x01u8; 20];
    let m = find_longest_match(&mut d, &input, 0);
    assert_eq!(m, MatchResult::Reference { offset: SEED_LEN, length: MAX_MATCH });
}
