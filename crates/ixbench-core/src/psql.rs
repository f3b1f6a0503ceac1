use crate::config::{BenchConfig, ADMIN_DB, PG_HOST, PG_PORT, TARGET_DB};
use crate::errors::{BenchError, BenchResult};
use crate::process::{CommandRunner, Invocation};
use std::path::Path;

/// SQL access through `psql` inside the compose service.
///
/// Every call names its database explicitly and runs with
/// `ON_ERROR_STOP=1`, so the first failing statement aborts the call.
pub struct Psql<'a> {
    runner: &'a dyn CommandRunner,
    cfg: &'a BenchConfig,
}

impl<'a> Psql<'a> {
    pub fn new(runner: &'a dyn CommandRunner, cfg: &'a BenchConfig) -> Self {
        Self { runner, cfg }
    }

    fn invocation<I, S>(&self, db: &str, extra: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = self.cfg.compose_args();
        args.extend(
            [
                "exec".to_string(),
                "-T".to_string(),
                "-e".to_string(),
                format!("PGPASSWORD={}", self.cfg.pg_password),
                self.cfg.service.clone(),
                "psql".to_string(),
                "-h".to_string(),
                PG_HOST.to_string(),
                "-p".to_string(),
                PG_PORT.to_string(),
                "-U".to_string(),
                self.cfg.pg_user.clone(),
                "-d".to_string(),
                db.to_string(),
                "-v".to_string(),
                "ON_ERROR_STOP=1".to_string(),
            ]
            .into_iter()
            .chain(extra.into_iter().map(Into::into)),
        );
        Invocation::new(&self.cfg.docker_bin, args)
    }

    /// Run one or more statements and return psql's raw stdout.
    pub async fn execute(&self, db: &str, sql: &str) -> BenchResult<String> {
        let out = self.runner.run(self.invocation(db, ["-c", sql])).await?;
        Ok(out.stdout_text())
    }

    /// Single value in tuples-only, unaligned, quiet mode, trimmed.
    pub async fn fetch_scalar(&self, db: &str, sql: &str) -> BenchResult<String> {
        let out = self
            .runner
            .run(self.invocation(db, ["-Atq", "-c", sql]))
            .await?;
        Ok(out.stdout_text().trim().to_string())
    }

    /// Stream a whole script on stdin (`-f -`).
    pub async fn apply_script(&self, db: &str, script: Vec<u8>) -> BenchResult<()> {
        let inv = self.invocation(db, ["-f", "-"]).with_stdin(script);
        self.runner.run(inv).await?;
        Ok(())
    }

    pub async fn apply_file(&self, db: &str, path: &Path) -> BenchResult<()> {
        let script = tokio::fs::read(path).await.map_err(|source| BenchError::Script {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(event = "ixbench.apply_script", db, path = %path.display(), bytes = script.len());
        self.apply_script(db, script).await
    }

    /// Drop and create [`TARGET_DB`] while connected to [`ADMIN_DB`];
    /// the engine refuses to drop the database a session is connected to.
    pub async fn recreate_target_database(&self) -> BenchResult<()> {
        let ident = quote_ident(TARGET_DB);
        self.execute(ADMIN_DB, &format!("DROP DATABASE IF EXISTS {};", ident))
            .await?;
        self.execute(ADMIN_DB, &format!("CREATE DATABASE {};", ident))
            .await?;
        Ok(())
    }
}

/// Double-quoted SQL identifier with embedded quotes doubled.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
