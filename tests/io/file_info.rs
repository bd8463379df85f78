// Integration tests for src/io/file_info.rs: `--list` support.

use std::fs;

use crtf::frame::{encode, ContainerType};
use crtf::io::{display_compressed_files_info, get_container_info};

#[test]
fn stored_container_info() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("m.lzfu");
    fs::write(&p, encode(b"0123456789", false)).unwrap();

    let info = get_container_info(p.to_str().unwrap()).unwrap();
    assert_eq!(info.container, Some(ContainerType::Stored));
    assert_eq!(info.type_name(), "MELA");
    assert_eq!(info.header.raw_size, 10);
    assert_eq!(info.file_size, 26);
    assert!(info.ratio_percent() > 100.0);
}

#[test]
fn unknown_tag_is_listed() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("u.lzfu");
    let mut c = encode(b"x", true);
    c[8..12].copy_from_slice(b"ZZZZ");
    fs::write(&p, c).unwrap();

    let info = get_container_info(p.to_str().unwrap()).unwrap();
    assert_eq!(info.container, None);
    assert_eq!(info.type_name(), "????");
    display_compressed_files_info(&[p.to_str().unwrap()]).unwrap();
}

#[test]
fn missing_file_fails_the_listing() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("g.lzfu");
    fs::write(&good, encode(b"g", true)).unwrap();
    let missing = dir.path().join("nope.lzfu");
    assert!(display_compressed_files_info(&[
        good.to_str().unwrap(),
        missing.to_str().unwrap()
    ])
    .is_err());
}
