//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_napier"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn export_writes_svg_bones() {
    let dir = std::env::temp_dir().join("napier_cli_export");
    let _ = std::fs::remove_dir_all(&dir);
    let log = std::env::temp_dir().join("napier_cli_export.log");
    let config = std::env::temp_dir().join("napier_cli_export.toml");
    std::fs::write(
        &config,
        format!("log_file_path = {:?}\n", log.to_string_lossy()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_napier"))
        .arg("--export-bones")
        .arg(&dir)
        .args(["--scale", "0.5"])
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 10);
    let svg = std::fs::read_to_string(dir.join("bone-3.svg")).unwrap();
    assert!(svg.starts_with("<?xml") && svg.contains("<svg"));

    std::fs::remove_dir_all(dir).ok();
    std::fs::remove_file(log).ok();
    std::fs::remove_file(config).ok();
}
