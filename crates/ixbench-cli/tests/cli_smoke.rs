use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn test_help_lists_env_backed_options() {
    Command::cargo_bin("ixbench")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--compose-file"))
        .stdout(contains("DC_FILE"))
        .stdout(contains("--sql-dir"));
}

#[test]
fn test_rejects_subcommands() {
    Command::cargo_bin("ixbench")
        .unwrap()
        .arg("run")
        .assert()
        .failure();
}

#[test]
fn test_missing_docker_binary_exits_non_zero() {
    Command::cargo_bin("ixbench")
        .unwrap()
        .env("IXBENCH_DOCKER", "ixbench-no-such-docker")
        .assert()
        .code(1)
        .stderr(contains("fatal: failed to start `ixbench-no-such-docker`"));
}

#[cfg(unix)]
#[test]
fn test_failed_bring_up_exits_non_zero() {
    Command::cargo_bin("ixbench")
        .unwrap()
        .env("IXBENCH_DOCKER", "false")
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("fatal: command failed: false compose -f"));
}
