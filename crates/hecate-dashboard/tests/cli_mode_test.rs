use std::process::Command;

#[test]
fn check_with_sample_config_succeeds() {
    let binary_path = env!("CARGO_BIN_EXE_hecate-dashboard");
    let config_path = format!("{}/config/dashboard.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config_path)
        .arg("check")
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to start hecate-dashboard binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn check_rejects_invalid_config() {
    let binary_path = env!("CARGO_BIN_EXE_hecate-dashboard");
    let dir = std::env::temp_dir().join(format!("hecate-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("bad.yaml");
    std::fs::write(
        &config_path,
        "clusters:\n  - id: a\n    name: A\n  - id: a\n    name: B\n",
    )
    .unwrap();

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(&config_path)
        .arg("check")
        .output()
        .expect("Failed to start hecate-dashboard binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate cluster id"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn env_override_is_validated() {
    let binary_path = env!("CARGO_BIN_EXE_hecate-dashboard");
    let config_path = format!("{}/config/dashboard.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config_path)
        .arg("check")
        .env("HECATE__UI__TICK_MS", "0")
        .output()
        .expect("Failed to start hecate-dashboard binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_ms"), "stderr: {stderr}");
}
