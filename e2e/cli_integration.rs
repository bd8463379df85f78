// e2e/cli_integration.rs: CLI integration tests
//
// Tests the `crtf` binary as a black-box CLI tool using std::process::Command.
// Covers argument parsing, compress/decompress dispatch, automatic output
// names, stdin/stdout piping, exit codes, test mode, and list mode.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const BODY: &[u8] = b"{\\rtf1\\ansi\\ansicpg1252\\pard hello world}\r\n";

const REFERENCE_CONTAINER: [u8; 49] = [
    0x2d, 0x00, 0x00, 0x00, 0x2b, 0x00, 0x00, 0x00, 0x4c, 0x5a, 0x46, 0x75, 0xf1, 0xc5, 0xc7,
    0xa7, 0x03, 0x00, 0x0a, 0x00, 0x72, 0x63, 0x70, 0x67, 0x31, 0x32, 0x35, 0x42, 0x32, 0x0a,
    0xf3, 0x20, 0x68, 0x65, 0x6c, 0x09, 0x00, 0x20, 0x62, 0x77, 0x05, 0xb0, 0x6c, 0x64, 0x7d,
    0x0a, 0x80, 0x0f, 0xa0,
];

/// Locate the `crtf` binary produced by Cargo.
fn crtf_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_crtf") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("crtf");
    p
}

/// Create a TempDir containing an RTF body of a few kilobytes.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("body.rtf");
    let content = "{\\pard\\plain\\f0\\fs20 Hello, compressed RTF!\\par}\r\n".repeat(120);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

/// Run `crtf` with `args`, feeding `stdin_data` on stdin and capturing output.
fn run_with_stdin(dir: &Path, args: &[&str], stdin_data: &[u8]) -> Output {
    let mut child = Command::new(crtf_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn crtf");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin_data)
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Run `crtf` with `args` and no stdin.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(crtf_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run crtf")
}

// ── 1. Compress / decompress roundtrip ───────────────────────────────────────

#[test]
fn test_cli_compress_decompress_roundtrip() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let compressed = dir.path().join("output.lzfu");
    let roundtrip = dir.path().join("roundtrip.rtf");

    let out = run(
        dir.path(),
        &["-z", "-f", input.to_str().unwrap(), compressed.to_str().unwrap()],
    );
    assert!(out.status.success(), "compress step should exit 0");
    assert!(compressed.exists());
    assert!(fs::metadata(&compressed).unwrap().len() < original.len() as u64);

    let out = run(
        dir.path(),
        &["-d", "-f", compressed.to_str().unwrap(), roundtrip.to_str().unwrap()],
    );
    assert!(out.status.success(), "decompress step should exit 0");
    assert_eq!(fs::read(&roundtrip).unwrap(), original);
}

// ── 2. Automatic output names ────────────────────────────────────────────────

#[test]
fn test_cli_auto_names_and_direction() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();

    let out = run(dir.path(), &["body.rtf"]);
    assert!(out.status.success());
    let container = dir.path().join("body.rtf.lzfu");
    assert!(container.exists(), "compressed name should append .lzfu");

    fs::remove_file(&input).unwrap();
    let out = run(dir.path(), &["body.rtf.lzfu"]);
    assert!(out.status.success(), "a .lzfu input should be decompressed");
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn test_cli_decompress_needs_known_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blob.bin"), REFERENCE_CONTAINER).unwrap();
    let out = run(dir.path(), &["-d", "blob.bin"]);
    assert!(!out.status.success());
}

// ── 3. --version / --help ────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let out = run(Path::new("."), &["--version"]);
    assert!(out.status.success(), "--version should exit 0");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "--version should print the package version; got: {stdout}"
    );
}

#[test]
fn test_cli_help() {
    let out = run(Path::new("."), &["--help"]);
    assert!(out.status.success(), "--help should exit 0");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.to_lowercase().contains("usage"));
    assert!(stdout.contains("--strict"));
}

#[test]
fn test_cli_unknown_flag() {
    let out = run(Path::new("."), &["--frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
}

// ── 4. stdin / stdout ────────────────────────────────────────────────────────

#[test]
fn test_cli_stdin_to_stdout_matches_reference() {
    let dir = TempDir::new().unwrap();
    let out = run_with_stdin(dir.path(), &["-z"], BODY);
    assert!(out.status.success());
    assert_eq!(out.stdout, REFERENCE_CONTAINER);
}

#[test]
fn test_cli_decompress_stdin() {
    let dir = TempDir::new().unwrap();
    let out = run_with_stdin(dir.path(), &["-d", "-c"], &REFERENCE_CONTAINER);
    assert!(out.status.success());
    assert_eq!(out.stdout, BODY);
}

#[test]
fn test_cli_dash_means_stdin() {
    let dir = TempDir::new().unwrap();
    let out = run_with_stdin(dir.path(), &["-d", "-", "-"], &REFERENCE_CONTAINER);
    assert!(out.status.success());
    assert_eq!(out.stdout, BODY);
}

// ── 5. Container type and source handling ───────────────────────────────────

#[test]
fn test_cli_store_writes_mela() {
    let (dir, input) = make_temp_input();
    let out = run(dir.path(), &["--store", input.to_str().unwrap()]);
    assert!(out.status.success());
    let c = fs::read(dir.path().join("body.rtf.lzfu")).unwrap();
    assert_eq!(&c[8..12], b"MELA");
    assert_eq!(&c[12..16], &[0, 0, 0, 0]);
}

#[test]
fn test_cli_rm_removes_source() {
    let (dir, input) = make_temp_input();
    let out = run(dir.path(), &["--rm", input.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(!input.exists(), "--rm should delete the source");
    assert!(dir.path().join("body.rtf.lzfu").exists());
}

#[test]
fn test_cli_keep_source_by_default() {
    let (dir, input) = make_temp_input();
    let out = run(dir.path(), &["-k", input.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(input.exists());
}

#[test]
fn test_cli_refuses_to_overwrite_without_force() {
    let (dir, input) = make_temp_input();
    let target = dir.path().join("body.rtf.lzfu");
    fs::write(&target, b"precious").unwrap();

    let out = run(dir.path(), &[input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert_eq!(fs::read(&target).unwrap(), b"precious");

    let out = run(dir.path(), &["-f", input.to_str().unwrap()]);
    assert!(out.status.success());
    assert_ne!(fs::read(&target).unwrap(), b"precious");
}

// ── 6. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_test_mode_valid() {
    let dir = TempDir::new().unwrap();
    let c = dir.path().join("valid.lzfu");
    fs::write(&c, REFERENCE_CONTAINER).unwrap();
    let out = run(dir.path(), &["-t", c.to_str().unwrap()]);
    assert!(out.status.success(), "-t on a valid container should exit 0");
    assert!(!dir.path().join("valid").exists());
}

#[test]
fn test_cli_test_mode_corrupt() {
    let dir = TempDir::new().unwrap();
    let c = dir.path().join("corrupt.lzfu");
    let mut data = REFERENCE_CONTAINER.to_vec();
    data[30] ^= 0xFF;
    fs::write(&c, data).unwrap();
    let out = run(dir.path(), &["-t", c.to_str().unwrap()]);
    assert!(!out.status.success(), "-t on a corrupt container should exit non-zero");
}

// ── 7. Strict mode ───────────────────────────────────────────────────────────

#[test]
fn test_cli_strict_rejects_size_mismatch() {
    let dir = TempDir::new().unwrap();
    let c = dir.path().join("odd.lzfu");
    let mut data = REFERENCE_CONTAINER.to_vec();
    data[4] = 0x2c;
    fs::write(&c, data).unwrap();

    let lenient = run(dir.path(), &["-t", c.to_str().unwrap()]);
    assert!(lenient.status.success());

    let strict = run(dir.path(), &["-t", "--strict", c.to_str().unwrap()]);
    assert!(!strict.status.success());

    let env_strict = Command::new(crtf_bin())
        .args(["-t", c.to_str().unwrap()])
        .env("CRTF_STRICT", "1")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!env_strict.status.success());
}

// ── 8. Missing input ─────────────────────────────────────────────────────────

#[test]
fn test_cli_nonexistent_input() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["-z", "does_not_exist.rtf", "out.lzfu"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("out.lzfu").exists());
}

// ── 9. --list ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_list_mode() {
    let dir = TempDir::new().unwrap();
    let c = dir.path().join("ref.lzfu");
    fs::write(&c, REFERENCE_CONTAINER).unwrap();

    let out = run(dir.path(), &["--list", c.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("LZFu"), "got: {stdout}");
    assert!(stdout.contains("0xa7c7c5f1"), "got: {stdout}");
    assert!(stdout.contains("ref.lzfu"), "got: {stdout}");
}

// ── 10. Multiple inputs ──────────────────────────────────────────────────────

#[test]
fn test_cli_multiple_inputs() {
    let dir = TempDir::new().unwrap();
    let names = ["one.rtf", "two.rtf", "three.rtf"];
    for (i, n) in names.iter().enumerate() {
        fs::write(dir.path().join(n), BODY.repeat(i + 1)).unwrap();
    }

    let mut args = vec!["-m", "-T", "2"];
    args.extend_from_slice(&names);
    let out = run(dir.path(), &args);
    assert!(out.status.success());

    for n in &names {
        fs::remove_file(dir.path().join(n)).unwrap();
    }
    let containers: Vec<String> = names.iter().map(|n| format!("{}.lzfu", n)).collect();
    let mut args = vec!["-d", "-m"];
    args.extend(containers.iter().map(|s| s.as_str()));
    let out = run(dir.path(), &args);
    assert!(out.status.success());

    for (i, n) in names.iter().enumerate() {
        assert_eq!(fs::read(dir.path().join(n)).unwrap(), BODY.repeat(i + 1));
    }
}

#[test]
fn test_cli_multiple_to_stdout_concatenates() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.lzfu"), REFERENCE_CONTAINER).unwrap();
    fs::write(dir.path().join("b.lzfu"), REFERENCE_CONTAINER).unwrap();
    let out = run(dir.path(), &["-d", "-c", "-m", "a.lzfu", "b.lzfu"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, [BODY, BODY].concat());
}
