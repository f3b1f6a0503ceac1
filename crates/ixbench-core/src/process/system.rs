use super::{CommandOutput, CommandRunner, Invocation};
use crate::errors::{BenchError, BenchResult};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Runs invocations as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn spawn(&self, inv: &Invocation) -> BenchResult<CommandOutput> {
        let spawn_err = |source| BenchError::Spawn {
            program: inv.program.clone(),
            source,
        };

        let mut child = Command::new(&inv.program)
            .args(&inv.args)
            .stdin(if inv.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_err)?;

        // Feed stdin while draining stdout/stderr so a chatty script cannot
        // fill the output pipe and stall the child.
        let pipe = child.stdin.take();
        let feed = async {
            if let (Some(mut pipe), Some(input)) = (pipe, inv.stdin.as_deref()) {
                // A child that exits early closes the pipe; its exit code tells the story.
                if let Err(e) = pipe.write_all(input).await {
                    tracing::debug!(event = "ixbench.stdin_closed", error = %e);
                }
            }
        };
        let ((), output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(spawn_err)?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
