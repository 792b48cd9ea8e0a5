//! End-to-end tests for the `filter-pick-range` binary: argument handling,
//! inclusive range filtering, the 1000-row cap and reproducible sampling.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_filter-pick-range"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch filter-pick-range")
}

fn run_range(input: &Path, min: &str, max: &str, output: &Path) -> Output {
    run(&[input, Path::new(min), Path::new(max), output])
}

/// `total` rows; the first `in_range` have dex_size inside [1000, 5000],
/// the rest alternate between too small, too large and non-numeric.
fn write_input(path: &Path, total: usize, in_range: usize) {
    let mut text = String::from("id,name,dex_size\n");
    for i in 0..total {
        let size = if i < in_range {
            (1000 + (i * 37) % 4001).to_string()
        } else {
            match i % 3 {
                0 => "999".to_string(),
                1 => (5001 + i).to_string(),
                _ => "broken".to_string(),
            }
        };
        text.push_str(&format!("{i},app-{i},{size}\n"));
    }
    fs::write(path, text).unwrap();
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["id", "name", "dex_size"]
    );
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn caps_large_selection_at_1000_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    write_input(&input, 1500, 1200);

    let out = run_range(&input, "1000", "5000", &output);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Success Saved 1000 rows to"), "stdout: {stdout}");

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1000);
    for row in &rows {
        let size: f64 = row[2].parse().unwrap();
        assert!((1000.0..=5000.0).contains(&size), "row {row:?}");
    }
}

#[test]
fn small_selection_is_written_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    write_input(&input, 500, 300);

    let out = run_range(&input, "1000", "5000", &output);
    assert!(out.status.success());

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 300);
    let ids: Vec<usize> = rows.iter().map(|r| r[0].parse().unwrap()).collect();
    assert_eq!(ids, (0..300).collect::<Vec<_>>());
    assert_eq!(rows[0], vec!["0", "app-0", "1000"]);
}

#[test]
fn same_input_gives_same_sample() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    write_input(&input, 3000, 2500);

    assert!(run_range(&input, "1000", "5000", &first).status.success());
    assert!(run_range(&input, "1000", "5000", &second).status.success());
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn wrong_argument_count_prints_usage_and_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    write_input(&input, 10, 5);

    let out = run(&[&input, Path::new("1000"), Path::new("5000")]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Usage: "), "stdout: {stdout}");
    assert!(stdout.contains("<input.csv> <min_size> <max_size> <output.csv>"));
    assert!(!output.exists());
}

#[test]
fn non_integer_bound_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    write_input(&input, 10, 5);

    let out = run_range(&input, "ten", "5000", &output);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("min_size"));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_range(
        &dir.path().join("absent.csv"),
        "1",
        "2",
        &dir.path().join("out.csv"),
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
}
