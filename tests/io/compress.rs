// Integration tests for src/io/compress.rs: file-level container writing.

use std::fs;

use crtf::frame::{decode, read_header, ContainerType};
use crtf::io::{compress_filename, compress_multiple_filenames, Prefs, NUL_MARK};

const BODY: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\pard hello world}\r\n";

#[test]
fn single_file_roundtrips_through_decode() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("body.rtf");
    let dst = dir.path().join("body.rtf.lzfu");
    fs::write(&src, BODY).unwrap();

    let stats = compress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &Prefs::default())
        .unwrap();
    assert_eq!(stats.bytes_read, 43);
    assert_eq!(stats.bytes_written, 49);

    let container = fs::read(&dst).unwrap();
    assert_eq!(decode(&container).unwrap(), BODY);
    assert!(src.exists());
}

#[test]
fn store_preference_writes_mela() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("s.rtf");
    let dst = dir.path().join("s.rtf.lzfu");
    fs::write(&src, BODY).unwrap();

    let mut prefs = Prefs::default();
    prefs.set_use_compression(false);
    compress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap();

    let header = read_header(&fs::read(&dst).unwrap()).unwrap();
    assert_eq!(header.container_type(), Ok(ContainerType::Stored));
}

#[test]
fn existing_destination_needs_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("o.rtf");
    let dst = dir.path().join("o.rtf.lzfu");
    fs::write(&src, BODY).unwrap();
    fs::write(&dst, b"keep me").unwrap();

    let mut prefs = Prefs::default();
    prefs.set_overwrite(true);
    compress_filename(src.to_str().unwrap(), dst.to_str().unwrap(), &prefs).unwrap();
    assert_eq!(decode(&fs::read(&dst).unwrap()).unwrap(), BODY);
}

#[test]
fn missing_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("absent.rtf");
    let err = compress_filename(src.to_str().unwrap(), NUL_MARK, &Prefs::default()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn multiple_files_sequential_and_parallel() {
    let dir = tempfile::tempdir().unwrap();
    let names: Vec<String> = (0..6)
        .map(|i| {
            let p = dir.path().join(format!("f{}.rtf", i));
            fs::write(&p, BODY.repeat(i + 1)).unwrap();
            p.to_str().unwrap().to_owned()
        })
        .collect();
    let srcs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();

    for workers in [1usize, 4] {
        let mut prefs = Prefs::default();
        prefs.set_overwrite(true);
        prefs.set_nb_workers(workers);
        assert_eq!(compress_multiple_filenames(&srcs, ".lzfu", &prefs).unwrap(), 0);
        for (i, name) in names.iter().enumerate() {
            let c = fs::read(format!("{}.lzfu", name)).unwrap();
            assert_eq!(decode(&c).unwrap(), BODY.repeat(i + 1));
        }
    }
}

#[test]
fn multiple_files_to_null_device() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("n.rtf");
    fs::write(&src, BODY).unwrap();
    let srcs = [src.to_str().unwrap()];
    assert_eq!(compress_multiple_filenames(&srcs, NUL_MARK, &Prefs::default()).unwrap(), 0);
    assert!(!dir.path().join("n.rtf.lzfu").exists());
}
