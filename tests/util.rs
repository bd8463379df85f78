// Integration tests for src/util: input list expansion and mtime propagation.

use std::fs;
use std::time::{Duration, SystemTime};

use crtf::util::{copy_file_mtime, create_file_list, is_directory, is_reg_file};

#[test]
fn directory_expands_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("b.rtf"), b"b").unwrap();
    fs::write(dir.path().join("a.rtf"), b"a").unwrap();
    fs::write(dir.path().join("sub").join("c.rtf"), b"c").unwrap();

    let root = dir.path().to_str().unwrap();
    let list = create_file_list(&[root]).unwrap();
    let names: Vec<String> = list
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().trim_start_matches(std::path::MAIN_SEPARATOR).to_owned())
        .collect();
    let expected: Vec<String> = vec![
        "a.rtf".to_owned(),
        "b.rtf".to_owned(),
        format!("sub{}c.rtf", std::path::MAIN_SEPARATOR),
    ];
    assert_eq!(names, expected);
}

#[test]
fn plain_files_pass_through() {
    let list = create_file_list(&["not-there.rtf", "also-not.rtf"]).unwrap();
    assert_eq!(list, vec!["not-there.rtf", "also-not.rtf"]);
}

#[test]
fn mtime_is_copied() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src.rtf");
    let dst = dir.path().join("dst.lzfu");
    fs::write(&src, b"s").unwrap();
    fs::write(&dst, b"d").unwrap();
    assert!(is_reg_file(&src));
    assert!(is_directory(dir.path()));

    let past = SystemTime::now() - Duration::from_secs(86_400);
    filetime::set_file_mtime(&src, filetime::FileTime::from_system_time(past)).unwrap();
    copy_file_mtime(&src, &dst).unwrap();

    let a = fs::metadata(&src).unwrap().modified().unwrap();
    let b = fs::metadata(&dst).unwrap().modified().unwrap();
    assert_eq!(a, b);
}
