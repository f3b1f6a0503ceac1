use ixbench_core::config::BenchConfig;
use ixbench_core::process::fake::ScriptedRunner;
use ixbench_core::process::{CommandOutput, Invocation};
use ixbench_core::readiness::{ensure_service_ready, probe_health, MAX_PROBES};
use ixbench_core::BenchError;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::time::{Duration, Instant};

fn is_probe(inv: &Invocation) -> bool {
    inv.args.first().map(String::as_str) == Some("inspect")
}

fn probe_count(runner: &ScriptedRunner) -> usize {
    runner.calls().iter().filter(|i| is_probe(i)).count()
}

/// Reports `starting` until the `n`-th probe, then `healthy`.
fn healthy_on_probe(n: u32) -> ScriptedRunner {
    let polls = Arc::new(AtomicU32::new(0));
    ScriptedRunner::new(move |inv| {
        if is_probe(inv) {
            let k = polls.fetch_add(1, Ordering::SeqCst) + 1;
            if k >= n {
                CommandOutput::ok("healthy\n")
            } else {
                CommandOutput::ok("starting\n")
            }
        } else {
            CommandOutput::ok("")
        }
    })
}

#[tokio::test(start_paused = true)]
async fn test_healthy_on_first_probe_does_not_sleep() {
    let cfg = BenchConfig::default();
    let runner = healthy_on_probe(1);
    let started = Instant::now();

    ensure_service_ready(&runner, &cfg, &mut Vec::<String>::new()).await.unwrap();

    assert_eq!(probe_count(&runner), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);

    let calls = runner.calls();
    assert_eq!(
        calls[0].args,
        vec!["compose", "-f", "docker/docker-compose.yml", "up", "-d"]
    );
    assert_eq!(
        calls[1].args,
        vec!["inspect", "-f", "{{.State.Health.Status}}", "kk_pg"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_healthy_on_last_allowed_probe() {
    let cfg = BenchConfig::default();
    let runner = healthy_on_probe(60);
    let started = Instant::now();

    ensure_service_ready(&runner, &cfg, &mut Vec::<String>::new()).await.unwrap();

    assert_eq!(probe_count(&runner), 60);
    assert!(started.elapsed() >= Duration::from_secs(59));
    assert!(started.elapsed() < Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn test_never_healthy_times_out_after_exactly_60_probes() {
    let cfg = BenchConfig::default();
    let runner = healthy_on_probe(u32::MAX);

    let err = ensure_service_ready(&runner, &cfg, &mut Vec::<String>::new()).await.unwrap_err();

    match err {
        BenchError::ReadinessTimeout {
            attempts,
            last_status,
        } => {
            assert_eq!(attempts, MAX_PROBES);
            assert_eq!(last_status, "starting");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(probe_count(&runner), MAX_PROBES as usize);
}

#[tokio::test(start_paused = true)]
async fn test_failed_probe_counts_as_unknown_and_consumes_an_attempt() {
    let cfg = BenchConfig::default();
    let runner = ScriptedRunner::new(|inv| {
        if is_probe(inv) {
            CommandOutput::failed(1, "Error: No such object: kk_pg")
        } else {
            CommandOutput::ok("")
        }
    });

    assert_eq!(probe_health(&runner, &cfg).await, "unknown");

    let err = ensure_service_ready(&runner, &cfg, &mut Vec::<String>::new()).await.unwrap_err();
    assert!(matches!(
        err,
        BenchError::ReadinessTimeout { ref last_status, .. } if last_status == "unknown"
    ));
    // one direct probe above plus the full budget
    assert_eq!(probe_count(&runner), 1 + MAX_PROBES as usize);
}

#[tokio::test(start_paused = true)]
async fn test_failed_bring_up_is_fatal_before_probing() {
    let cfg = BenchConfig::default();
    let runner = ScriptedRunner::new(|inv| {
        if inv.args.iter().any(|a| a == "up") {
            CommandOutput::failed(1, "service \"db\" has no image")
        } else {
            CommandOutput::ok("healthy")
        }
    });

    let err = ensure_service_ready(&runner, &cfg, &mut Vec::<String>::new()).await.unwrap_err();
    assert_eq!(err.captured_stderr(), Some("service \"db\" has no image"));
    assert_eq!(probe_count(&runner), 0);
}

#[tokio::test(start_paused = true)]
async fn test_bring_up_output_is_echoed_before_health_wait() {
    let cfg = BenchConfig::default();
    let runner = ScriptedRunner::new(|inv| {
        if is_probe(inv) {
            CommandOutput::ok("starting\n")
        } else {
            CommandOutput {
                code: Some(0),
                stdout: b"up-out\n".to_vec(),
                stderr: b" Container kk_pg  Started\n".to_vec(),
            }
        }
    });
    let mut progress: Vec<String> = Vec::new();

    let err = ensure_service_ready(&runner, &cfg, &mut progress)
        .await
        .unwrap_err();

    assert!(matches!(err, BenchError::ReadinessTimeout { .. }));
    assert_eq!(progress, vec!["up-out\n", " Container kk_pg  Started\n"]);
}
