//! Runs the `garage` binary against small event logs.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = r#"{
    "capacity": 2,
    "rates": { "perHour": 300, "graceMinutes": 15 },
    "events": [
        ["enter", "ABC123", 0],
        ["enter", "XYZ999", 5],
        ["enter", "OVERFL", 10],
        ["exit", "ABC123", 20],
        ["exit", "XYZ999", 100],
        ["exit", "GHOST", 50]
    ]
}"#;

fn garage(args: &[&str], stdin: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_garage"))
        .args(args)
        .env_remove("GARAGE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start garage");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_ref())
        .expect("failed to write stdin");
    child.wait_with_output().expect("garage did not finish")
}

#[test]
fn bill_json_from_stdin() {
    let output = garage(&["bill", "--json"], SAMPLE);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report,
        serde_json::json!({
            "receipts": [
                { "plate": "ABC123", "minutes": 20, "fee": 0, "exitedAt": 20 },
                { "plate": "XYZ999", "minutes": 95, "fee": 600, "exitedAt": 100 }
            ],
            "revenue": 600,
            "inside": {},
            "errors": [
                "enter denied: capacity full for OVERFL at 10",
                "exit denied: GHOST not inside at 50"
            ]
        })
    );
}

#[test]
fn bill_text_log_as_csv() {
    let log = "enter A 0\nexit A 190\nenter B 200\n";
    let output = garage(
        &["bill", "-", "--capacity", "1", "--per-hour", "300", "--grace", "15m", "--csv"],
        log,
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "plate,minutes,fee,exited_at\nA,190,900,190\n"
    );
}

#[test]
fn bill_table_is_default() {
    let output = garage(&["bill"], SAMPLE);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# <stdin>"));
    assert!(stdout.contains("Revenue: 600 (6.00)"));
}

#[test]
fn missing_capacity_exits_with_usage_code() {
    let output = garage(&["bill", "--per-hour", "300"], "enter A 0\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("capacity"));
}

#[test]
fn malformed_log_exits_with_input_code() {
    let output = garage(&["bill", "-c", "1", "--per-hour", "1"], "enter A\n");
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Line 1"));
}

#[test]
fn non_utf8_input_exits_with_input_code() {
    let output = garage(&["bill", "-c", "1", "--per-hour", "1"], b"enter \xff\xfe 0\n");
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid UTF-8"));
    assert_eq!(stderr.matches("UTF-8").count(), 1);
}

#[test]
fn fee_quote() {
    let output = garage(&["fee", "95m", "--per-hour", "300", "--grace", "15"], "");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("= 600 (6.00)"));
}
