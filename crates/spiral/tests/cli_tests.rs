//! End-to-end tests for the spiral binary.

mod common;

use common::{SAMPLE_ROWS, run_json, spiral_cmd, stderr_json};
use predicates::prelude::*;

// =============================================================================
// Decode
// =============================================================================

#[test]
fn test_decode_sample_rows() {
    spiral_cmd()
        .arg("decode")
        .args(SAMPLE_ROWS)
        .assert()
        .success()
        .stdout("HAVEANICEDAY\n");
}

#[test]
fn test_decode_odd_square_ends_at_center() {
    spiral_cmd()
        .args(["decode", "ABC", "DEF", "GHI"])
        .assert()
        .success()
        .stdout("ABCFIHGDE\n");
}

#[test]
fn test_decode_count_stops_early() {
    spiral_cmd()
        .arg("decode")
        .args(SAMPLE_ROWS)
        .args(["--count", "5"])
        .assert()
        .success()
        .stdout("HAVEA\n");
}

#[test]
fn test_decode_json_elements() {
    let json = run_json(&["decode", "ABC", "DEF", "GHI"]);
    assert_eq!(json["sequence"], "ABCFIHGDE");
    assert_eq!(json["count"], 9);
    let last = &json["elements"][8];
    assert_eq!(last["value"], "E");
    assert_eq!(last["tick"], 8);
    assert_eq!(last["row"], 1);
    assert_eq!(last["col"], 1);
    assert_eq!(last["delay_ms"], 1600);
}

#[test]
fn test_decode_interval_flag_scales_delays() {
    let json = run_json(&["decode", "AB", "--interval-ms", "50"]);
    assert_eq!(json["elements"][1]["delay_ms"], 50);
}

#[test]
fn test_decode_tick_interval_from_env() {
    let output = spiral_cmd()
        .env("SPIRAL_TICK_MS", "10")
        .args(["--json", "decode", "ABC"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["elements"][2]["delay_ms"], 20);
}

#[test]
fn test_decode_custom_placeholder() {
    let json = run_json(&["decode", "AB", "..", "--placeholder", "."]);
    assert_eq!(json["elements"][2]["value"], serde_json::Value::Null);
    assert_eq!(json["sequence"], "AB..");
}

#[test]
fn test_decode_placeholder_rows_after_separator() {
    spiral_cmd()
        .args(["decode", "--", "AB", "--"])
        .assert()
        .success()
        .stdout("AB--\n");
}

#[test]
fn test_decode_animate_prints_every_element() {
    spiral_cmd()
        .args(["decode", "AB", "DC", "--animate", "--interval-ms", "1"])
        .assert()
        .success()
        .stdout("ABCD\n");
}

#[test]
fn test_decode_ragged_rows_rejected() {
    spiral_cmd()
        .args(["decode", "ABC", "DE"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("same number of columns"));
}

#[test]
fn test_decode_count_beyond_capacity() {
    let (code, json) = stderr_json(&["decode", "AB", "--count", "3"]);
    assert_eq!(code, 64);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["category"], "invalid_input");
    assert_eq!(json["error"]["context"]["capacity"], 2);
}

#[test]
fn test_decode_requires_rows() {
    spiral_cmd().arg("decode").assert().code(64);
}

// =============================================================================
// Encode
// =============================================================================

#[test]
fn test_encode_sample_phrase() {
    spiral_cmd()
        .args(["encode", "have a nice day", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4x3 grid"))
        .stdout(predicate::str::contains("  H A V\n  D A E\n  E Y A\n  C I N\n"))
        .stdout(predicate::str::contains("Round trip: HAVEANICEDAY"));
}

#[test]
fn test_encode_json_grid() {
    let json = run_json(&["encode", "have", "a", "nice", "day"]);
    assert_eq!(json["source"], "HAVEANICEDAY");
    assert_eq!(json["rows"], 4);
    assert_eq!(json["cols"], 3);
    assert_eq!(
        json["grid"],
        serde_json::json!(["HAV", "DAE", "EYA", "CIN"])
    );
    assert_eq!(json["placements"].as_array().unwrap().len(), 12);
    assert!(json.get("verified").is_none());
}

#[test]
fn test_encode_partial_fill_shows_placeholder() {
    let json = run_json(&["encode", "AB", "--rows", "2", "--cols", "2"]);
    assert_eq!(json["grid"], serde_json::json!(["AB", "--"]));
}

#[test]
fn test_encode_derives_missing_dimension() {
    let json = run_json(&["encode", "abcdefg", "--cols", "3"]);
    assert_eq!(json["rows"], 3);
    assert_eq!(json["grid"], serde_json::json!(["ABC", "--D", "GFE"]));
}

#[test]
fn test_encode_raw_keeps_case_and_spaces() {
    let json = run_json(&["encode", "--raw", "a b", "--verify"]);
    assert_eq!(json["source"], "a b");
    assert_eq!(json["decoded"], "a b");
}

#[test]
fn test_encode_decode_round_trip() {
    let json = run_json(&["encode", "the quick brown fox", "--cols", "4"]);
    let rows: Vec<String> = json["grid"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap().to_string())
        .collect();
    let mut args = vec!["decode", "--"];
    args.extend(rows.iter().map(String::as_str));
    let decoded = run_json(&args);
    let sequence: String = decoded["elements"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["value"].as_str())
        .collect();
    assert_eq!(sequence, "THEQUICKBROWNFOX");
}

#[test]
fn test_encode_capacity_exceeded() {
    spiral_cmd()
        .args(["encode", "abcde", "--rows", "2", "--cols", "2"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("exceeds grid capacity 4"))
        .stderr(predicate::str::contains("Suggestion:"));
}

#[test]
fn test_encode_zero_dimension() {
    let (code, json) = stderr_json(&["encode", "abc", "--rows", "0", "--cols", "3"]);
    assert_eq!(code, 64);
    assert_eq!(json["error"]["context"]["rows"], 0);
}

#[test]
fn test_encode_zero_cols_reports_given_side() {
    let (code, json) = stderr_json(&["encode", "abcd", "--cols", "0"]);
    assert_eq!(code, 64);
    assert_eq!(json["error"]["context"]["rows"], 4);
    assert_eq!(json["error"]["context"]["cols"], 0);
}

#[test]
fn test_encode_rejects_placeholder_in_text() {
    spiral_cmd()
        .args(["encode", "a-b-c-d", "--rows", "3", "--cols", "3", "--verify"])
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("placeholder"))
        .stderr(predicate::str::contains("SPIRAL_PLACEHOLDER"));
}

#[test]
fn test_encode_with_other_placeholder_keeps_dashes() {
    let output = spiral_cmd()
        .env("SPIRAL_PLACEHOLDER", ".")
        .args(["--json", "encode", "a-b-c-d", "--rows", "3", "--cols", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows: Vec<&str> = json["grid"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap())
        .collect();

    let mut args = vec!["decode", "--placeholder", ".", "--"];
    args.extend(rows);
    let decoded = run_json(&args);
    let sequence: String = decoded["elements"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["value"].as_str())
        .collect();
    assert_eq!(sequence, "A-B-C-D");
}

#[test]
fn test_encode_blank_input() {
    spiral_cmd()
        .args(["encode", "   "])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("empty"));
}

// =============================================================================
// Sample and misc
// =============================================================================

#[test]
fn test_sample() {
    spiral_cmd()
        .arg("sample")
        .assert()
        .success()
        .stdout("HAVEANICEDAY\n");
}

#[test]
fn test_sample_json_timings() {
    let json = run_json(&["sample"]);
    assert_eq!(json["rows"], 4);
    assert_eq!(json["target_count"], 12);
    assert_eq!(json["elements"][11]["delay_ms"], 2200);
}

#[test]
fn test_no_color_env_accepts_any_value() {
    for value in ["1", "yes", "true", ""] {
        spiral_cmd()
            .env("NO_COLOR", value)
            .arg("sample")
            .assert()
            .success()
            .stdout("HAVEANICEDAY\n");
    }
}

#[test]
fn test_completions() {
    spiral_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spiral"));
}

#[test]
fn test_help_exits_zero() {
    spiral_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("spiral order"));
}

#[test]
fn test_log_file_receives_verbose_output() {
    let path = std::env::temp_dir().join(format!("spiral-log-{}.txt", std::process::id()));
    let _ = std::fs::remove_file(&path);
    spiral_cmd()
        .env("SPIRAL_LOG", &path)
        .args(["--verbose", "encode", "abc", "--verify"])
        .assert()
        .success();
    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("Round trip verified"));
    let _ = std::fs::remove_file(&path);
}
