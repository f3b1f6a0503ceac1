use std::path::PathBuf;

pub const PG_HOST: &str = "127.0.0.1";
pub const PG_PORT: u16 = 5432;

/// Database recreated from scratch on every run.
pub const TARGET_DB: &str = "krusty_crm";
/// Always-present database used to drop/create [`TARGET_DB`].
pub const ADMIN_DB: &str = "postgres";

/// Run-wide settings, resolved once at start-up and passed by reference.
#[derive(Clone)]
pub struct BenchConfig {
    pub compose_file: PathBuf,
    pub pg_user: String,
    pub pg_password: String,
    /// Directory holding `schema.sql`, `functions.sql`, `generate_test_data.sql`.
    pub sql_dir: PathBuf,
    pub docker_bin: String,
    /// Container name inspected for health status.
    pub container: String,
    /// Compose service that runs `psql`.
    pub service: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            compose_file: PathBuf::from("docker/docker-compose.yml"),
            pg_user: "postgres".to_string(),
            pg_password: "postgres".to_string(),
            sql_dir: PathBuf::from("db"),
            docker_bin: "docker".to_string(),
            container: "kk_pg".to_string(),
            service: "db".to_string(),
        }
    }
}

impl BenchConfig {
    /// `docker compose -f <file>` prefix shared by service bring-up and `psql`.
    pub fn compose_args(&self) -> Vec<String> {
        vec![
            "compose".to_string(),
            "-f".to_string(),
            self.compose_file.display().to_string(),
        ]
    }

    pub fn script_path(&self, name: &str) -> PathBuf {
        self.sql_dir.join(name)
    }
}

impl std::fmt::Debug for BenchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchConfig")
            .field("compose_file", &self.compose_file)
            .field("pg_user", &self.pg_user)
            .field("pg_password", &"[REDACTED]")
            .field("sql_dir", &self.sql_dir)
            .field("docker_bin", &self.docker_bin)
            .field("container", &self.container)
            .field("service", &self.service)
            .finish()
    }
}
