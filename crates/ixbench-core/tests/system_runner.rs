#![cfg(unix)]

use ixbench_core::process::system::SystemRunner;
use ixbench_core::process::{CommandRunner, Invocation};
use ixbench_core::BenchError;

#[tokio::test]
async fn test_captures_both_streams() {
    let out = SystemRunner
        .run(Invocation::new("sh", ["-c", "echo out; echo err >&2"]))
        .await
        .unwrap();
    assert!(out.success());
    assert_eq!(out.stdout_text(), "out\n");
    assert_eq!(out.stderr_text(), "err\n");
}

#[tokio::test]
async fn test_stdin_payload_is_delivered() {
    // larger than a pipe buffer, echoed straight back
    let payload: Vec<u8> = "insert into t values (1);\n".repeat(40_000).into_bytes();
    let out = SystemRunner
        .run(Invocation::new("cat", Vec::<String>::new()).with_stdin(payload.clone()))
        .await
        .unwrap();
    assert_eq!(out.stdout, payload);
}

#[tokio::test]
async fn test_non_zero_exit_is_fatal_when_required() {
    let err = SystemRunner
        .run(Invocation::new("sh", ["-c", "echo 'boom' >&2; exit 3"]))
        .await
        .unwrap_err();
    match err {
        BenchError::ExternalCommand { code, stderr, .. } => {
            assert_eq!(code, Some(3));
            assert_eq!(stderr, "boom\n");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_probe_returns_exit_code_instead_of_failing() {
    let out = SystemRunner
        .run(Invocation::new("sh", ["-c", "exit 3"]).probe())
        .await
        .unwrap();
    assert_eq!(out.code, Some(3));
    assert!(!out.success());
}

#[tokio::test]
async fn test_missing_program_is_spawn_error() {
    let err = SystemRunner
        .run(Invocation::new("ixbench-definitely-not-installed", ["x"]))
        .await
        .unwrap_err();
    assert!(matches!(err, BenchError::Spawn { ref program, .. } if program == "ixbench-definitely-not-installed"));
}
