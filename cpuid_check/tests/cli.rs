//! Exit status contract of the `cpuid-check` binary.

use std::process::{Command, Output};

fn cpuid_check(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpuid-check"))
        .args(args)
        .output()
        .expect("failed to run cpuid-check")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn usage_without_arguments() {
    let output = cpuid_check(&[]);
    assert_eq!(Some(2), output.status.code());
    let usage = String::from_utf8_lossy(&output.stderr);
    assert!(usage.contains("EAX"));
    assert!(usage.contains("BIT"));
}

fn assert_usage(args: &[&str]) {
    let output = cpuid_check(args);
    assert_eq!(Some(2), output.status.code(), "{args:?}");
    let text = format!("{}{}", stdout(&output), String::from_utf8_lossy(&output.stderr));
    assert!(text.contains("Usage:"), "{args:?}: no usage in {text:?}");
    assert!(!text.contains("After native_cpuid"), "{args:?}: query ran");
}

#[test]
fn usage_on_wrong_count() {
    for args in [
        &["7", "0"][..],
        &["7", "0", "0"],
        &["7", "0", "0", "0", "c"],
        &["7", "0", "0", "0", "c", "7", "1"],
    ] {
        assert_usage(args);
    }
}

#[test]
fn usage_on_malformed_values() {
    for args in [
        &["zz"][..],
        &["7", "0", "zz", "0"],
        &["7", "0", "0", "0", "cc", "7"],
        &["7", "0", "0", "0", "c", "x"],
    ] {
        assert_usage(args);
    }
}

#[test]
fn usage_on_bit_index_out_of_range() {
    assert_usage(&["7", "0", "0", "0", "c", "32"]);
    assert_usage(&["7", "0", "0", "0", "c", "-1"]);
}

#[test]
fn single_argument_skips_check() {
    let output = cpuid_check(&["1"]);
    assert_eq!(Some(0), output.status.code());
    let text = stdout(&output);
    assert!(text.starts_with("Just get eax=1\n"));
    assert!(text.contains("After native_cpuid:"));
    assert!(text.contains("Done! Return:0."));
}

#[test]
fn four_arguments_skip_check() {
    let output = cpuid_check(&["7", "0", "0", "0"]);
    assert_eq!(Some(0), output.status.code());
    let text = stdout(&output);
    assert!(text.starts_with("4 parameters, eax=7\n"));
    assert!(text.contains("cpuid(eax=00000007, ebx=00000000, ecx=00000000, edx=00000000)"));
    assert!(text.contains("  edx="));
    assert!(text.contains("No check requested, skip."));
    assert!(!text.contains("Now check"));
    assert!(text.contains("Done! Return:0."));
}

#[test]
fn debug_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpuid-check"))
        .arg("1")
        .env("CPUID_CHECK_DEBUG", "true")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cpuid-check");
    assert_eq!(Some(0), output.status.code());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cpuid input: eax=00000001"));
}

#[test]
fn unrecognized_selector_passes() {
    // leaf 0 EBX holds the vendor string, checking it must be skipped
    let output = cpuid_check(&["0", "0", "0", "0", "e", "0"]);
    assert_eq!(Some(0), output.status.code());
    assert!(stdout(&output).contains("No check point, not in a-d, skip."));
}

#[test]
fn check_reports_bit() {
    // leaf 1 EDX[0]: x87 FPU on chip
    let output = cpuid_check(&["1", "0", "0", "0", "d", "0"]);
    assert_eq!(Some(0), output.status.code());
    let text = stdout(&output);
    assert!(text.contains("Now check cpuid edx, bit 0"));
    assert!(text.contains("Order bit:31, invert order:0, bit:1, pass!"));
}

#[test]
fn check_status_matches_report() {
    let output = cpuid_check(&["7", "0", "0", "0", "c", "7"]);
    let text = stdout(&output);
    match output.status.code() {
        Some(0) => assert!(text.contains("bit:1, pass!") && text.contains("Done! Return:0.")),
        Some(1) => assert!(text.contains("bit:0, fail!") && text.contains("Done! Return:1.")),
        code => panic!("unexpected exit status {code:?}"),
    }
}
