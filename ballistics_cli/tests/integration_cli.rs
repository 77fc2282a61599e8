use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ballistics_cli"))
}

#[test]
fn test_cli_calculate_defaults() {
    let output = cli()
        .args(["calculate"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TRAJECTORY RESULTS"));
    assert!(stdout.contains("61.3"), "Should report zero-adjusted drop: {}", stdout);
    assert!(stdout.contains("187.5"), "Should report wind drift: {}", stdout);
    assert!(stdout.contains("0.375"), "Should report time of flight: {}", stdout);
    assert!(stdout.contains("Zeroed at 100 m"));
}

#[test]
fn test_cli_calculate_json() {
    let output = cli()
        .args([
            "calculate",
            "--velocity", "800",
            "--weight", "9",
            "--bc", "0.5",
            "--distance", "300",
            "--wind-speed", "0",
            "--wind-angle", "90",
            "--no-zero",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"trajectory\""));
    assert!(stdout.contains("\"wind_drift_cm\": 0.0"));
    assert!(!stdout.contains("zero_drop_cm"));
}

#[test]
fn test_cli_calm_wind_from_the_left() {
    let output = cli()
        .args(["calculate", "--wind-speed", "0", "--wind-angle", "270"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("-0.0"), "No signed zero in output: {}", stdout);
}

#[test]
fn test_cli_zero_distance_conflicts_with_no_zero() {
    let output = cli()
        .args(["calculate", "--zero-distance", "200", "--no-zero"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Conflicting zero flags should fail");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("TRAJECTORY RESULTS"));
    assert!(stderr.contains("cannot be used with"), "{}", stderr);
}

#[test]
fn test_cli_overflowing_shot_rejected() {
    let output = cli()
        .args([
            "calculate",
            "--velocity", "1e-200",
            "--distance", "1e200",
            "--wind-speed", "0",
            "--no-zero",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Overflowing shot should fail");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("inf") && !stdout.contains("NaN"), "{}", stdout);
    assert!(stderr.contains("INVALID_INPUT") || stderr.contains("InvalidInput"));
    assert!(stderr.contains("distance"), "{}", stderr);
}

#[test]
fn test_cli_invalid_number() {
    let output = cli()
        .args(["calculate", "--weight", "abc"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid input should fail");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("TRAJECTORY RESULTS"), "No results on invalid input");
    assert!(stderr.contains("INVALID_INPUT") || stderr.contains("InvalidInput"));
    assert!(stderr.contains("weight"));
}

#[test]
fn test_cli_negative_value_reaches_validation() {
    let output = cli()
        .args(["calculate", "--distance", "-50"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Distance cannot be negative"), "{}", stderr);
}

#[test]
fn test_cli_export_not_implemented() {
    let output = cli()
        .args(["export"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not implemented: export results"));
}

#[test]
fn test_cli_save_config_not_implemented() {
    let output = cli()
        .args(["save-config"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not implemented: save configuration"));
}

#[test]
fn test_cli_missing_settings_file() {
    let output = cli()
        .args(["calculate", "--settings", "does-not-exist.json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FileError"));
}

#[test]
fn test_cli_help() {
    let output = cli()
        .args(["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calculate"));
    assert!(stdout.contains("export"));
    assert!(stdout.contains("save-config"));
}

#[test]
fn test_cli_invalid_command() {
    let output = cli()
        .args(["invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");
}
