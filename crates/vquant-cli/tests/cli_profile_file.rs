use std::process::Command;

fn run_ok(args: &[&str]) -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_vquant-cli"))
        .env("RUST_LOG", "warn")
        .args(args)
        .output()
        .expect("spawn vquant-cli");
    assert!(
        out.status.success(),
        "command failed: {args:?}\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

#[test]
fn saved_builtin_inspects_as_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bipolar.vqp");
    let p = path.to_str().unwrap();

    run_ok(&["profile", "save", "--profile", "5v_bipolar", "--out", p]);
    let out = run_ok(&["profile", "inspect", "--path", p]);

    assert!(out.contains("builtin      = 5v_bipolar"), "{out}");
    assert!(out.contains("shape        = bipolar"), "{out}");
    assert!(out.contains("code_range   = -32767..=32767"), "{out}");
    assert!(out.contains("reg_bits     = 16"), "{out}");
}

#[test]
fn custom_profile_drives_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adc12.vqp");
    let p = path.to_str().unwrap();

    run_ok(&[
        "profile", "save", "--shape", "unipolar", "--full-scale", "4.095", "--max-code", "4095",
        "--out", p,
    ]);
    let out = run_ok(&["forward", "--profile-file", p, "--volts", "1.0"]);
    assert!(out.contains("code = 1000"), "{out}");
    assert!(out.contains("reg  = 0x03e8"), "{out}");
}

#[test]
fn invalid_custom_profile_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.vqp");
    let out = Command::new(env!("CARGO_BIN_EXE_vquant-cli"))
        .env("RUST_LOG", "warn")
        .args([
            "profile", "save", "--shape", "unipolar", "--full-scale", "0", "--out",
            path.to_str().unwrap(),
        ])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid profile"));
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.vqp");
    std::fs::write(&path, b"VQP1garbage").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_vquant-cli"))
        .env("RUST_LOG", "warn")
        .args(["profile", "inspect", "--path", path.to_str().unwrap()])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("decode profile"));
}

#[test]
fn profiles_lists_builtins() {
    let out = run_ok(&["profiles", "--ids"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3, "{out}");
    assert!(lines[0].starts_with("3v3"));
    assert!(lines[1].starts_with("5v0"));
    assert!(lines[2].starts_with("5v_bipolar"));
    assert!(lines.iter().all(|l| l.contains("id=")));
}

#[test]
fn bits_sets_signed_code_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adc12b.vqp");
    let p = path.to_str().unwrap();

    run_ok(&[
        "profile", "save", "--shape", "bipolar", "--full-scale", "10.0", "--bits", "12", "--out", p,
    ]);
    let out = run_ok(&["profile", "inspect", "--path", p]);
    assert!(out.contains("max_code     = 2047"), "{out}");
    assert!(out.contains("reg_bits     = 12"), "{out}");

    let out = run_ok(&["forward", "--profile-file", p, "--volts", "-10.0"]);
    assert!(out.contains("code = -2047"), "{out}");
    assert!(out.contains("reg  = 0x801"), "{out}");
}

#[test]
fn bits_out_of_range_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.vqp");
    let out = Command::new(env!("CARGO_BIN_EXE_vquant-cli"))
        .env("RUST_LOG", "warn")
        .args([
            "profile", "save", "--shape", "unipolar", "--full-scale", "5", "--bits", "40", "--out",
            path.to_str().unwrap(),
        ])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("code width"));
    assert!(!path.exists());
}
