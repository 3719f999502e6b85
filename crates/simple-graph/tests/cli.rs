// File: crates/simple-graph/tests/cli.rs
// Purpose: End-to-end checks of the script binary: exit code, stdout, output file.

use std::path::PathBuf;
use std::process::Command;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("simple-graph-{}-{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_simple-graph"))
        .current_dir(dir)
        .output()
        .expect("spawn simple-graph")
}

#[test]
fn writes_png_and_prints_confirmation() {
    let dir = scratch_dir("ok");
    let out = run_in(&dir);

    assert!(
        out.status.success(),
        "expected exit 0, stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Wrote simple_graph.png\n");

    let png = std::fs::read(dir.join("simple_graph.png")).expect("output exists");
    assert!(png.starts_with(&PNG_MAGIC), "output should be a PNG");
}

#[test]
fn rerun_overwrites_output() {
    let dir = scratch_dir("rerun");

    let first = run_in(&dir);
    assert!(first.status.success());
    let len_before = std::fs::metadata(dir.join("simple_graph.png")).unwrap().len();

    // Second run replaces the file in place; no state accumulates across runs.
    let second = run_in(&dir);
    assert!(second.status.success());
    assert_eq!(String::from_utf8_lossy(&second.stdout), "Wrote simple_graph.png\n");

    let png = std::fs::read(dir.join("simple_graph.png")).expect("output still there");
    assert!(png.starts_with(&PNG_MAGIC));
    assert_eq!(png.len() as u64, len_before, "same chart renders to an equivalent file");
}

#[test]
fn unwritable_output_fails_without_confirmation() {
    let dir = scratch_dir("blocked");
    // A directory squatting on the output name makes the write fail even when
    // the test runs as root, where a read-only directory would not.
    std::fs::create_dir(dir.join("simple_graph.png")).unwrap();

    let out = run_in(&dir);

    assert!(!out.status.success(), "expected a non-zero exit");
    assert!(
        out.stdout.is_empty(),
        "no confirmation line on failure, got: {}",
        String::from_utf8_lossy(&out.stdout)
    );
    assert!(!out.stderr.is_empty(), "the error should be reported");
}
