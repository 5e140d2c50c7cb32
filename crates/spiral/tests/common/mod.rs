#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;

/// The binary with every variable that changes its output cleared.
pub fn spiral_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spiral"));
    cmd.env_remove("SPIRAL_TICK_MS")
        .env_remove("SPIRAL_PLACEHOLDER")
        .env_remove("SPIRAL_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

pub fn run_json(args: &[&str]) -> Value {
    let output = spiral_cmd().arg("--json").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "spiral {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

pub fn stderr_json(args: &[&str]) -> (i32, Value) {
    let output = spiral_cmd().arg("--json").args(args).output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    (code, serde_json::from_slice(&output.stderr).unwrap())
}

pub const SAMPLE_ROWS: [&str; 4] = ["HAV", "DAE", "EYA", "CIN"];
