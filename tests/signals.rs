//! Process-level shutdown test: the binary exits 0 on SIGTERM and SIGINT.

#![cfg(unix)]

use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

fn spawn_service(port: u16) -> Child {
    Command::new(env!("CARGO_BIN_EXE_docker-status-service"))
        .env("APP_HOST", "127.0.0.1")
        .env("APP_PORT", port.to_string())
        .env("RUST_LOG", "off")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn service")
}

fn wait_until_listening(port: u16) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while TcpStream::connect(("127.0.0.1", port)).is_err() {
        assert!(Instant::now() < deadline, "service never started listening");
        std::thread::sleep(Duration::from_millis(50));
    }
}

fn send_signal(child: &Child, name: &str) {
    let status = Command::new("kill")
        .arg(format!("-{}", name))
        .arg(child.id().to_string())
        .status()
        .expect("failed to run kill");
    assert!(status.success());
}

fn assert_exits_cleanly(port: u16, signal: &str) {
    let mut child = spawn_service(port);
    wait_until_listening(port);
    send_signal(&child, signal);

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0), "exit status after {}: {:?}", signal, status);
}

#[test]
fn test_sigterm_exits_with_code_zero() {
    assert_exits_cleanly(28311, "TERM");
}

#[test]
fn test_sigint_exits_with_code_zero() {
    assert_exits_cleanly(28312, "INT");
}

#[test]
fn test_invalid_port_fails_startup() {
    let output = Command::new(env!("CARGO_BIN_EXE_docker-status-service"))
        .env("APP_PORT", "not-a-port")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid APP_PORT value"), "stderr: {}", stderr);
}
