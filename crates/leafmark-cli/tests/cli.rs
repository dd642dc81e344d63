use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_leafmark-cli") {
        return PathBuf::from(path);
    }
    if let Some(path) = env::var_os("CARGO_BIN_EXE_leafmark_cli") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("leafmark-cli");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "leafmark_cli_{}_{}_{}.md",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn renders_a_file_argument() {
    let input = temp_file("bold", "Halo **dunia**");
    let output = Command::new(bin_path())
        .arg(input.to_str().expect("path"))
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Halo <strong>dunia</strong>");
}

#[test]
fn renders_stdin_when_no_argument_is_given() {
    let mut child = Command::new(bin_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"- a\n- b")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<ul"), "{}", stdout);
    assert_eq!(stdout.matches("<li").count(), 2, "{}", stdout);
}

#[test]
fn history_profile_skips_emoji_emphasis() {
    let input = temp_file("emoji", "🌿 Monstera");
    let chat = Command::new(bin_path())
        .arg(input.to_str().expect("path"))
        .output()
        .expect("run");
    let history = Command::new(bin_path())
        .args(["--profile", "history", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(String::from_utf8_lossy(&chat.stdout).contains("<span"));
    assert!(!String::from_utf8_lossy(&history.stdout).contains("<span"));
}

#[test]
fn sanitized_flag_strips_smuggled_markup() {
    let input = temp_file(
        "table",
        "| <script>alert(1)</script>x | b |\n| --- | --- |\n| c | d |\n",
    );
    let output = Command::new(bin_path())
        .args(["--sanitized", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("alert(1)"), "{}", stdout);
    assert!(stdout.contains("<table"), "{}", stdout);
}

#[test]
fn unknown_flag_exits_with_usage_error() {
    let output = Command::new(bin_path())
        .arg("--bogus")
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "{}", stderr);
}

#[test]
fn bad_profile_value_exits_with_usage_error() {
    let output = Command::new(bin_path())
        .args(["--profile", "plain"])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
}
