use ixbench_core::config::BenchConfig;
use ixbench_core::process::system::SystemRunner;
use ixbench_core::report::StdoutProgress;
use ixbench_core::{BenchError, Driver};

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const FAILED: i32 = 1;
}

pub async fn run(cfg: BenchConfig) -> anyhow::Result<i32> {
    tracing::info!(event = "ixbench.start", config = ?cfg);
    let outcomes = Driver::new(&SystemRunner, &cfg)
        .run(&mut StdoutProgress)
        .await?;
    tracing::info!(event = "ixbench.finished", scenarios = outcomes.len());
    Ok(exit_codes::OK)
}

/// Single top-level handler: report the failure on stderr and pick the exit code.
pub fn report_failure(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<BenchError>() {
        // the tool's own error output is what the user needs to see
        Some(BenchError::ExternalCommand { command, stderr, .. }) => {
            eprintln!("{}", stderr.trim_end());
            eprintln!("fatal: command failed: {}", command);
        }
        _ => eprintln!("fatal: {e}"),
    }
    exit_codes::FAILED
}
