//! External process seam.
//!
//! Everything the benchmark does to the outside world (compose, inspect,
//! psql) goes through a [`CommandRunner`], so the protocol can be driven by
//! [`fake::ScriptedRunner`] in tests.

pub mod fake;
pub mod system;

use crate::errors::{BenchError, BenchResult};
use async_trait::async_trait;
use std::fmt;

/// One external command: argument vector, optional stdin payload, and
/// whether a non-zero exit aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<Vec<u8>>,
    pub must_succeed: bool,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
            must_succeed: true,
        }
    }

    pub fn with_stdin(mut self, input: Vec<u8>) -> Self {
        self.stdin = Some(input);
        self
    }

    /// Non-fatal probe: the caller inspects the exit code itself.
    pub fn probe(mut self) -> Self {
        self.must_succeed = false;
        self
    }

    /// Value following the last `flag` in the argument vector, e.g. the SQL
    /// after `-c`. The last occurrence wins: `docker compose -f <file>` and
    /// `psql -f -` share a flag.
    pub fn arg_after(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .rposition(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

/// Renders the command line with credentials passed as `-e NAME=value`
/// masked, so invocations are safe to log and to put into errors.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        let mut after_env_flag = false;
        for a in &self.args {
            if after_env_flag {
                match a.split_once('=') {
                    Some((name, _)) if is_secret_name(name) => write!(f, " {}=[REDACTED]", name)?,
                    _ => write!(f, " {}", a)?,
                }
            } else {
                write!(f, " {}", a)?;
            }
            after_env_flag = a == "-e";
        }
        Ok(())
    }
}

fn is_secret_name(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    upper.contains("PASSWORD") || upper.contains("SECRET") || upper.contains("TOKEN")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Start the process, feed stdin, and capture both streams in full.
    /// Does not interpret the exit code.
    async fn spawn(&self, inv: &Invocation) -> BenchResult<CommandOutput>;

    /// [`spawn`](Self::spawn), then enforce `must_succeed`. No retries here.
    async fn run(&self, inv: Invocation) -> BenchResult<CommandOutput> {
        tracing::debug!(event = "ixbench.command", command = %inv);
        let out = self.spawn(&inv).await?;
        if inv.must_succeed && !out.success() {
            return Err(BenchError::ExternalCommand {
                command: inv.to_string(),
                code: out.code,
                stderr: out.stderr_text(),
            });
        }
        Ok(out)
    }
}
