use std::path::PathBuf;

/// Failure taxonomy for a benchmark run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A required external command exited non-zero.
    #[error("command `{command}` exited with {}: {stderr}", exit_label(.code))]
    ExternalCommand {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The external program could not be started at all.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("database service not healthy after {attempts} probes (status={last_status})")]
    ReadinessTimeout { attempts: u32, last_status: String },

    #[error("Execution Time not found in EXPLAIN output")]
    TimingNotFound,

    #[error("failed to read SQL script {}: {source}", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type BenchResult<T> = Result<T, BenchError>;

impl BenchError {
    /// Captured stderr of a failed external command, if that is what failed.
    pub fn captured_stderr(&self) -> Option<&str> {
        match self {
            BenchError::ExternalCommand { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_command_message_carries_stderr() {
        let e = BenchError::ExternalCommand {
            command: "docker compose up -d".into(),
            code: Some(1),
            stderr: "no such service: db".into(),
        };
        assert_eq!(
            e.to_string(),
            "command `docker compose up -d` exited with status 1: no such service: db"
        );
        assert_eq!(e.captured_stderr(), Some("no such service: db"));
    }

    #[test]
    fn test_killed_by_signal() {
        let e = BenchError::ExternalCommand {
            command: "psql".into(),
            code: None,
            stderr: String::new(),
        };
        assert!(e.to_string().contains("exited with signal"));
        assert!(BenchError::TimingNotFound.captured_stderr().is_none());
    }
}
