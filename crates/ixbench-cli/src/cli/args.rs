use clap::Parser;
use ixbench_core::config::BenchConfig;
use std::path::PathBuf;

/// Every option is environment-backed and optional, so a bare `ixbench`
/// runs the whole benchmark with defaults.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ixbench",
    version,
    about = "Measure query timings before and after creating indexes on the Krusty CRM database"
)]
pub struct Cli {
    /// docker compose file that defines the database service
    #[arg(long, env = "DC_FILE", default_value = "docker/docker-compose.yml")]
    pub compose_file: PathBuf,

    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub pg_user: String,

    #[arg(long, env = "PGPASSWORD", default_value = "postgres", hide_env_values = true)]
    pub pg_password: String,

    /// Directory with schema.sql, functions.sql and generate_test_data.sql
    #[arg(long, env = "IXBENCH_SQL_DIR", default_value = "db")]
    pub sql_dir: PathBuf,

    #[arg(long, env = "IXBENCH_DOCKER", default_value = "docker", hide = true)]
    pub docker_bin: String,

    /// Container inspected for health status
    #[arg(long, env = "IXBENCH_CONTAINER", default_value = "kk_pg")]
    pub container: String,

    /// Compose service that runs psql
    #[arg(long, env = "IXBENCH_SERVICE", default_value = "db")]
    pub service: String,

    /// tracing filter for diagnostics on stderr (e.g. info, ixbench_core=debug).
    /// Consumed by logging setup, not part of the run configuration.
    #[arg(long, env = "IXBENCH_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn into_config(self) -> BenchConfig {
        BenchConfig {
            compose_file: self.compose_file,
            pg_user: self.pg_user,
            pg_password: self.pg_password,
            sql_dir: self.sql_dir,
            docker_bin: self.docker_bin,
            container: self.container,
            service: self.service,
        }
    }
}
