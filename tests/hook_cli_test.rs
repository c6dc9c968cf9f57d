//! 端到端测试：通过 stdin 驱动 gemini-notify 二进制

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_hook(input: &str, term_program: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gemini-notify"))
        .env("TERM_PROGRAM", term_program)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gemini-notify");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait gemini-notify")
}

#[test]
fn test_malformed_json_exits_zero_silently() {
    let output = run_hook("not json", "kitty");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_stdin_exits_zero_silently() {
    let output = run_hook("", "kitty");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_after_agent_in_kitty_writes_osc9() {
    let output = run_hook(
        r#"{"hook_event_name":"AfterAgent","message":"Refactor complete"}"#,
        "xterm-kitty",
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"\x1b]9;Refactor complete\x07");
}

#[test]
fn test_tool_permission_default_message_in_ghostty() {
    let output = run_hook(
        r#"{"hook_event_name":"Notification","notification_type":"ToolPermission"}"#,
        "Ghostty",
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        output.stdout,
        b"\x1b]9;Gemini needs permission to run a tool.\x07"
    );
}

#[test]
fn test_unknown_event_in_vscode_writes_diagnostic() {
    let output = run_hook(r#"{"hook_event_name":"BeforeTool"}"#, "vscode");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\x1b]9;"));
    assert!(stdout.ends_with('\x07'));
    assert!(stdout.contains("eventName: BeforeTool"));
    assert!(stdout.contains("data.notification_type: undefined"));
}
