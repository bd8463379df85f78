// Integration tests for src/block/dict.rs: seeded ring dictionary.

use crtf::block::{Dictionary, DICT_CAPACITY, SEED, SEED_LEN};

#[test]
fn seed_occupies_the_first_slots() {
    let d = Dictionary::new();
    assert_eq!(SEED_LEN, 207);
    for (i, &b) in SEED.iter().enumerate() {
        assert_eq!(d.read_at(i), b, "slot {}", i);
    }
    assert_eq!(d.write_offset(), SEED_LEN);
    assert!(!d.has_wrapped());
}

#[test]
fn unseeded_slots_hold_spaces() {
    let d = Dictionary::new();
    assert_eq!(d.read_at(SEED_LEN), b' ');
    assert_eq!(d.read_at(DICT_CAPACITY - 1), b' ');
}

#[test]
fn read_at_reduces_modulo_capacity() {
    let d = Dictionary::new();
    assert_eq!(d.read_at(DICT_CAPACITY), d.read_at(0));
    assert_eq!(d.read_at(DICT_CAPACITY + 5), d.read_at(5));
}

#[test]
fn cursor_wraps_after_capacity_commits() {
    let mut d = Dictionary::new();
    for _ in 0..DICT_CAPACITY - SEED_LEN {
        d.commit(b'z');
    }
    assert_eq!(d.write_offset(), 0);
    assert!(d.has_wrapped());

    d.commit(b'!');
    assert_eq!(d.read_at(0), b'!');
    assert_eq!(d.write_offset(), 1);
}

#[test]
fn search_extent_grows_until_wrap() {
    let mut d = Dictionary::new();
    assert_eq!(d.search_extent(SEED_LEN, 0), SEED_LEN);
    assert_eq!(d.search_extent(SEED_LEN, 3), SEED_LEN + 3);
    for _ in 0..DICT_CAPACITY {
        d.commit(0);
    }
    assert_eq!(d.search_extent(d.write_offset(), 0), DICT_CAPACITY);
}
