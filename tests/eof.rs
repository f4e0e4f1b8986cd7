use std::process::{Command, Stdio};

#[test]
fn end_of_input_prints_farewell_and_exits_zero() {
    // a scratch HOME keeps the skeleton alias file out of the real one
    let home = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_nsh"))
        .env("HOME", home.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Buh bye."), "stdout was: {stdout}");

    // first run also leaves the skeleton alias file behind
    assert!(home.path().join(".nsh_alias").exists());
}
