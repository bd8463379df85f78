//! E2E Test Suite 07: File API
//!
//! Drives the library's file layer (`crtf::io`) through whole workflows on a
//! real directory tree: expand inputs, compress them in parallel, inspect the
//! containers, verify them in test mode, and decode them back.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crtf::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, get_container_info, Prefs, NUL_MARK,
};
use crtf::util::create_file_list;

fn rtf(i: usize) -> Vec<u8> {
    format!(
        "{{\\rtf1\\ansi\\deff0 {{\\fonttbl{{\\f0 Arial;}}}}\\pard document {} {}\\par}}\r\n",
        i,
        "lorem ipsum ".repeat(i * 50)
    )
    .into_bytes()
}

fn populate(root: &Path) -> Vec<(String, Vec<u8>)> {
    fs::create_dir_all(root.join("inbox").join("2024")).unwrap();
    let rel = ["a.rtf", "inbox/b.rtf", "inbox/2024/c.rtf", "inbox/2024/d.rtf"];
    rel.iter()
        .enumerate()
        .map(|(i, r)| {
            let p = root.join(r);
            let body = rtf(i);
            fs::write(&p, &body).unwrap();
            (p.to_str().unwrap().to_owned(), body)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: tree round-trip on a worker pool
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tree_roundtrip_parallel() {
    let dir = tempfile::tempdir().unwrap();
    let files = populate(dir.path());

    let list = create_file_list(&[dir.path().to_str().unwrap()]).unwrap();
    assert_eq!(list.len(), files.len());

    let mut prefs = Prefs::default();
    prefs.set_nb_workers(3);
    prefs.set_remove_src_file(true);
    let srcs: Vec<&str> = list.iter().map(|s| s.as_str()).collect();
    assert_eq!(compress_multiple_filenames(&srcs, ".lzfu", &prefs).unwrap(), 0);

    for (path, _) in &files {
        assert!(!Path::new(path).exists(), "{} should have been removed", path);
    }

    let containers = create_file_list(&[dir.path().to_str().unwrap()]).unwrap();
    assert!(containers.iter().all(|c| c.ends_with(".lzfu")));
    let srcs: Vec<&str> = containers.iter().map(|s| s.as_str()).collect();
    decompress_multiple_filenames(&srcs, ".lzfu", &prefs).unwrap();

    for (path, body) in &files {
        assert_eq!(&fs::read(path).unwrap(), body);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: inspect, verify, then decode one container
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_inspect_verify_decode() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("msg.rtf");
    let body = rtf(7);
    fs::write(&src, &body).unwrap();
    let container = dir.path().join("msg.rtf.lzfu");

    let stats = compress_filename(
        src.to_str().unwrap(),
        container.to_str().unwrap(),
        &Prefs::default(),
    )
    .unwrap();
    assert_eq!(stats.bytes_read, body.len() as u64);
    assert!(stats.ratio_percent() < 50.0);

    let info = get_container_info(container.to_str().unwrap()).unwrap();
    assert_eq!(info.header.raw_size as usize, body.len());
    assert_eq!(info.file_size, stats.bytes_written);

    let mut test_prefs = Prefs::default();
    test_prefs.set_test_mode(true);
    let verified = decompress_filename(container.to_str().unwrap(), NUL_MARK, &test_prefs).unwrap();
    assert!(verified.clean);
    assert_eq!(verified.decompressed_bytes, body.len() as u64);

    let out = dir.path().join("msg.out.rtf");
    decompress_filename(
        container.to_str().unwrap(),
        out.to_str().unwrap(),
        &Prefs::default(),
    )
    .unwrap();
    assert_eq!(fs::read(&out).unwrap(), body);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: modification times follow the data
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mtime_survives_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("old.rtf");
    fs::write(&src, rtf(1)).unwrap();
    let past = SystemTime::now() - Duration::from_secs(30 * 86_400);
    filetime::set_file_mtime(&src, filetime::FileTime::from_system_time(past)).unwrap();
    let original_mtime = fs::metadata(&src).unwrap().modified().unwrap();

    let container = dir.path().join("old.rtf.lzfu");
    compress_filename(
        src.to_str().unwrap(),
        container.to_str().unwrap(),
        &Prefs::default(),
    )
    .unwrap();
    assert_eq!(fs::metadata(&container).unwrap().modified().unwrap(), original_mtime);

    let out = dir.path().join("restored.rtf");
    decompress_filename(
        container.to_str().unwrap(),
        out.to_str().unwrap(),
        &Prefs::default(),
    )
    .unwrap();
    assert_eq!(fs::metadata(&out).unwrap().modified().unwrap(), original_mtime);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: a directory is not a valid single input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_directory_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = compress_filename(dir.path().to_str().unwrap(), NUL_MARK, &Prefs::default())
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}
