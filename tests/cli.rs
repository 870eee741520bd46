use assert_cmd::Command;
use predicates::prelude::*;

fn dec2bin() -> Command {
    let mut cmd = Command::cargo_bin("dec2bin").unwrap();
    cmd.env_remove("DEC2BIN_GROUP_SIZE")
        .env_remove("DEC2BIN_SEPARATOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn raw_binary() {
    dec2bin().arg("255").assert().success().stdout("11111111\n");
}

#[test]
fn pretty_print_exact_groups() {
    dec2bin()
        .args(["--pretty-print", "--group-size", "4", "255"])
        .assert()
        .success()
        .stdout("1111 1111\n");
}

#[test]
fn pretty_print_pads_default_group() {
    dec2bin()
        .args(["--pretty-print", "5"])
        .assert()
        .success()
        .stdout("0101\n");
}

#[test]
fn one_line_per_number_in_order() {
    dec2bin()
        .args(["0", "1", "2", "1024"])
        .assert()
        .success()
        .stdout("0\n1\n10\n10000000000\n");
}

#[test]
fn group_size_without_pretty_print_is_ignored() {
    dec2bin()
        .args(["--group-size", "8", "5"])
        .assert()
        .success()
        .stdout("101\n");
}

#[test]
fn custom_separator() {
    dec2bin()
        .args(["--pretty-print", "--group-size", "3", "--separator", "_", "31"])
        .assert()
        .success()
        .stdout("011_111\n");
}

#[test]
fn arbitrary_precision() {
    // 2^100
    let expected = format!("1{}\n", "0".repeat(100));
    dec2bin()
        .arg("1267650600228229401496703205376")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn no_arguments_is_not_a_failure() {
    dec2bin()
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No input"));
}

#[test]
fn group_size_missing_value() {
    dec2bin()
        .args(["255", "--group-size"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("--group-size"));
}

#[test]
fn group_size_zero_rejected() {
    dec2bin()
        .args(["--pretty-print", "--group-size", "0", "255"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn group_size_not_a_number() {
    dec2bin()
        .args(["--group-size", "four", "255"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("four"));
}

#[test]
fn unrecognized_option() {
    dec2bin()
        .args(["--frobnicate", "255"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Option not recognized: --frobnicate"));
}

#[test]
fn negative_number_rejected() {
    dec2bin()
        .arg("-5")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn invalid_token_aborts_whole_run() {
    dec2bin()
        .args(["255", "12a", "3"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("12a"));
}

#[test]
fn help_exits_successfully() {
    dec2bin()
        .args(["--help", "12a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pretty-print"));
}

#[test]
fn version_banner() {
    dec2bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("dec2bin Version")
                .and(predicate::str::contains(
                    "Copyright (C) 2019 Jose Fernando Lopez Fernandez",
                ))
                .and(predicate::str::contains("GNU General Public License")),
        );
}

#[test]
fn version_json_carries_copyright() {
    let output = dec2bin().args(["--json", "--version"]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["copyright"], "Copyright (C) 2019 Jose Fernando Lopez Fernandez");
    assert_eq!(v["license"], "GPL-3.0-or-later");
}

#[test]
fn group_size_and_separator_from_environment() {
    dec2bin()
        .env("DEC2BIN_GROUP_SIZE", "8")
        .env("DEC2BIN_SEPARATOR", "_")
        .args(["--pretty-print", "4095"])
        .assert()
        .success()
        .stdout("00001111_11111111\n");
}

#[test]
fn command_line_overrides_environment() {
    dec2bin()
        .env("DEC2BIN_GROUP_SIZE", "8")
        .args(["--pretty-print", "--group-size", "4", "255"])
        .assert()
        .success()
        .stdout("1111 1111\n");
}

#[test]
fn zero_group_size_from_environment_rejected() {
    dec2bin()
        .env("DEC2BIN_GROUP_SIZE", "0")
        .args(["--pretty-print", "255"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("group size"));
}

#[test]
fn debug_logs_to_stderr_only() {
    dec2bin()
        .args(["--debug", "5"])
        .assert()
        .success()
        .stdout("101\n")
        .stderr(
            predicate::str::contains("converted")
                .and(predicate::str::contains("input=\"5\""))
                .and(predicate::str::contains("timing")),
        );
}

#[test]
fn quiet_without_debug() {
    dec2bin().arg("5").assert().success().stderr("");
}

#[test]
fn rust_log_takes_precedence_over_debug() {
    dec2bin()
        .env("RUST_LOG", "off")
        .args(["--debug", "5"])
        .assert()
        .success()
        .stdout("101\n")
        .stderr("");
}

#[test]
fn rust_log_enables_debug_without_flag() {
    dec2bin()
        .env("RUST_LOG", "debug")
        .arg("5")
        .assert()
        .success()
        .stdout("101\n")
        .stderr(predicate::str::contains("converted"));
}

#[test]
fn json_output() {
    let output = dec2bin()
        .args(["--json", "--pretty-print", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v[0]["input"], "5");
    assert_eq!(v[0]["binary"], "101");
    assert_eq!(v[0]["formatted"], "0101");
}

#[test]
fn json_error_envelope() {
    let output = dec2bin().args(["--json", "abc"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(v["ok"], false);
    assert_eq!(v["error"]["code"], "invalid_number_format");
}

#[test]
fn table_output_without_header() {
    dec2bin()
        .args(["--output", "table", "--no-header", "255"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11111111").and(predicate::str::contains("DECIMAL").not()));
}
