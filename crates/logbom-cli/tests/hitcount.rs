//! `hitcount` 命令行行为测试
mod common;
use common::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

const RESULTS: &str = "\nResults:\n/media/videos/2008-07-14        2 hits\n/media/videos/2008-07-15        1 hits\n";

#[test]
fn default_glob_skips_unrelated_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("access.log"), ACCESS_LOG).unwrap();
    fs::write(dir.path().join("access.log.1"), ACCESS_LOG).unwrap();
    fs::write(dir.path().join("notes.txt"), ACCESS_LOG).unwrap();

    hitcount_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Going to analyze 2 files ...\nParsing access.log ...\nParsing access.log.1 ...\n",
        ))
        .stdout(predicate::str::contains("/media/videos/2008-07-14        4 hits"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn no_matching_files_exits_with_usage_code() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), ACCESS_LOG).unwrap();

    hitcount_cmd()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No files given."));
}

#[test]
fn gzip_input_counts_like_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(ACCESS_LOG.as_bytes()).unwrap();
    fs::write(dir.path().join("plain.log"), ACCESS_LOG).unwrap();
    fs::write(dir.path().join("packed.log.gz"), enc.finish().unwrap()).unwrap();

    for name in ["plain.log", "packed.log.gz"] {
        hitcount_cmd()
            .current_dir(dir.path())
            .arg(name)
            .assert()
            .success()
            .stdout(format!("Going to analyze 1 files ...\nParsing {name} ...{RESULTS}"));
    }
}

#[test]
fn missing_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("access.log"), ACCESS_LOG).unwrap();

    hitcount_cmd()
        .current_dir(dir.path())
        .args(["gone.log", "access.log"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(RESULTS))
        .stderr(predicate::str::contains("gone.log"));
}

#[test]
fn json_output_replaces_table() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("access.log"), ACCESS_LOG).unwrap();

    hitcount_cmd()
        .current_dir(dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"[{"key":"/media/videos/2008-07-14","hits":2},{"key":"/media/videos/2008-07-15","hits":1}]"#,
        ))
        .stdout(predicate::str::contains("Results:").not());
}
