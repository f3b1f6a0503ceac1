use crate::config::BenchConfig;
use crate::errors::{BenchError, BenchResult};
use crate::process::{CommandOutput, CommandRunner, Invocation};
use crate::report::Progress;
use tokio::time::{sleep, Duration};

pub const MAX_PROBES: u32 = 60;
pub const PROBE_INTERVAL: Duration = Duration::from_secs(1);

const HEALTHY: &str = "healthy";
const UNKNOWN: &str = "unknown";

/// `docker compose up -d`. Idempotent against a running service.
/// Returns the captured output so the caller can echo it.
pub async fn start_service(
    runner: &dyn CommandRunner,
    cfg: &BenchConfig,
) -> BenchResult<CommandOutput> {
    let mut args = cfg.compose_args();
    args.extend(["up".to_string(), "-d".to_string()]);
    runner.run(Invocation::new(&cfg.docker_bin, args)).await
}

/// One health probe. A failed inspect counts as `unknown`, never as an error.
pub async fn probe_health(runner: &dyn CommandRunner, cfg: &BenchConfig) -> String {
    let inv = Invocation::new(
        &cfg.docker_bin,
        [
            "inspect",
            "-f",
            "{{.State.Health.Status}}",
            cfg.container.as_str(),
        ],
    )
    .probe();
    match runner.run(inv).await {
        Ok(out) if out.success() => out.stdout_text().trim().to_string(),
        Ok(_) => UNKNOWN.to_string(),
        Err(e) => {
            tracing::debug!(event = "ixbench.health_probe_failed", error = %e);
            UNKNOWN.to_string()
        }
    }
}

/// Poll until the container reports `healthy`, at most [`MAX_PROBES`] times,
/// sleeping [`PROBE_INTERVAL`] after every unhealthy answer.
pub async fn wait_until_healthy(
    runner: &dyn CommandRunner,
    cfg: &BenchConfig,
) -> BenchResult<()> {
    let mut last_status = UNKNOWN.to_string();
    for attempt in 1..=MAX_PROBES {
        last_status = probe_health(runner, cfg).await;
        tracing::debug!(event = "ixbench.health_probe", attempt, status = %last_status);
        if last_status == HEALTHY {
            tracing::info!(event = "ixbench.service_ready", attempts = attempt);
            return Ok(());
        }
        sleep(PROBE_INTERVAL).await;
    }
    Err(BenchError::ReadinessTimeout {
        attempts: MAX_PROBES,
        last_status,
    })
}

/// Start the service, echo its output right away, then wait for health.
pub async fn ensure_service_ready(
    runner: &dyn CommandRunner,
    cfg: &BenchConfig,
    progress: &mut dyn Progress,
) -> BenchResult<()> {
    let up = start_service(runner, cfg).await?;
    progress.raw(&up.stdout_text());
    progress.raw(&up.stderr_text());
    wait_until_healthy(runner, cfg).await
}
