use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

static BIN: &str = env!("CARGO_BIN_EXE_ipexpand");

fn run_in(dir: &Path, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("IPEXPAND_LOG")
        .env_remove("IPEXPAND_OUTPUT_FILE")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn no_arguments_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), Vec::<&str>::new());

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("Usage:"));
    assert!(text.contains("192.168.1.1-20 --out"));
}

#[test]
fn range_is_printed() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), ["192.168.1.1-3"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Result:\n192.168.1.1\n192.168.1.2\n192.168.1.3\n"
    );
}

#[test]
fn range_error_is_the_result() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), ["-q", "192.168.1.9-192.168.2.1"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("invalid range"));
}

#[test]
fn out_flag_writes_res_txt() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), ["10.0.0.1-2", "--out"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("res.txt"));
    assert!(!stdout(&output).contains("10.0.0.1"));
    assert_eq!(
        fs::read_to_string(dir.path().join("res.txt")).unwrap(),
        "10.0.0.1\n10.0.0.2"
    );
}

#[test]
fn out_flag_falls_back_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing-dir").join("res.txt");
    let output = run_in(
        dir.path(),
        [
            OsStr::new("10.0.0.1-2"),
            OsStr::new("--out"),
            OsStr::new("--output-file"),
            target.as_os_str(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("failed to save result to"));
    assert!(text.ends_with("10.0.0.1\n10.0.0.2\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn output_file_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(BIN)
        .args(["10.0.0.7-8", "--out", "-q"])
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env("IPEXPAND_OUTPUT_FILE", "env-res.txt")
        .env_remove("IPEXPAND_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(dir.path().join("env-res.txt")).unwrap(),
        "10.0.0.7\n10.0.0.8"
    );
    assert!(!dir.path().join("res.txt").exists());
}

#[test]
fn stray_argument_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), ["1.1.1.1-3", "foo"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn file_mode_reports_errors_first() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ranges.txt"), "192.168.1.1-3\n\nbad-range\n").unwrap();

    let output = run_in(dir.path(), ["ranges.txt", "-q"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("line 3 (bad-range): "));
    assert_eq!(lines[1], "");
    assert_eq!(&lines[2..], ["192.168.1.1", "192.168.1.2", "192.168.1.3"]);
}

#[test]
fn legacy_prefix_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ranges.txt"), "10.9.8.7-8\n").unwrap();

    let output = run_in(dir.path(), ["file: ranges.txt"]);
    let text = stdout(&output);
    assert!(text.contains("Processing file: ranges.txt"));
    assert!(text.ends_with("10.9.8.7\n10.9.8.8\n"));
}

#[test]
fn legacy_prefix_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), ["-q", "file:nope.txt"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "file not found: nope.txt\n");
}

#[test]
fn config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.json");
    fs::write(&config, r#"{"output_file": "ips.txt", "output_format": "csv"}"#).unwrap();

    let output = run_in(
        dir.path(),
        [
            OsStr::new("10.0.0.1-1"),
            OsStr::new("--out"),
            OsStr::new("--config"),
            config.as_os_str(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(dir.path().join("ips.txt")).unwrap(),
        "kind,line,input,value\naddress,,10.0.0.1-1,10.0.0.1\n"
    );
}

#[test]
fn json_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), ["10.0.0.1-2", "--format", "json"]);

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["addresses"][0], "10.0.0.1");
    assert_eq!(value["source"], "10.0.0.1-2");
}
