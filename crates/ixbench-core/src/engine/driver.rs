use crate::catalog::Case;
use crate::config::{BenchConfig, TARGET_DB};
use crate::engine::procedure::run_scenario;
use crate::errors::BenchResult;
use crate::explain::PgExplain;
use crate::measure::Measurer;
use crate::model::ScenarioOutcome;
use crate::process::CommandRunner;
use crate::psql::Psql;
use crate::readiness::ensure_service_ready;
use crate::report::{console, Progress};

/// Applied to the fresh database in this order.
pub const SCHEMA_SCRIPTS: [&str; 2] = ["schema.sql", "functions.sql"];
pub const DATA_SCRIPT: &str = "generate_test_data.sql";

/// Run-level states; any failure aborts the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ServiceReady,
    DatabaseRecreated,
    SchemaLoaded,
    DataLoaded,
    Scenario(usize),
    Done,
}

fn enter(stage: Stage) {
    tracing::info!(event = "ixbench.stage", stage = ?stage);
}

pub struct Driver<'a> {
    runner: &'a dyn CommandRunner,
    cfg: &'a BenchConfig,
}

impl<'a> Driver<'a> {
    pub fn new(runner: &'a dyn CommandRunner, cfg: &'a BenchConfig) -> Self {
        Self { runner, cfg }
    }

    /// Service up, database rebuilt and loaded, then every [`Case`] in order.
    pub async fn run(&self, progress: &mut dyn Progress) -> BenchResult<Vec<ScenarioOutcome>> {
        ensure_service_ready(self.runner, self.cfg, progress).await?;
        enter(Stage::ServiceReady);

        let psql = Psql::new(self.runner, self.cfg);

        progress.line("recreating database");
        psql.recreate_target_database().await?;
        enter(Stage::DatabaseRecreated);

        progress.line("applying schema and functions");
        for script in SCHEMA_SCRIPTS {
            psql.apply_file(TARGET_DB, &self.cfg.script_path(script)).await?;
        }
        enter(Stage::SchemaLoaded);

        progress.line("generating data (this may take ~30-60s)");
        psql.apply_file(TARGET_DB, &self.cfg.script_path(DATA_SCRIPT))
            .await?;
        enter(Stage::DataLoaded);

        let measurer = Measurer::new(&psql, &PgExplain);
        let mut outcomes = Vec::with_capacity(Case::ALL.len());
        for (i, case) in Case::ALL.into_iter().enumerate() {
            enter(Stage::Scenario(i + 1));
            let scenario = case.prepare(&psql, TARGET_DB).await?;
            progress.line(&console::scenario_header(&scenario.name));

            let outcome =
                run_scenario(&psql, &measurer, TARGET_DB, &scenario, progress).await?;
            tracing::info!(
                event = "ixbench.scenario_done",
                scenario = %outcome.name,
                before_ms = outcome.before_ms,
                after_ms = outcome.after_ms,
                index_size = outcome.index_size.as_deref().unwrap_or("-")
            );
            outcomes.push(outcome);
        }

        for l in console::summary(&outcomes) {
            progress.line(&l);
        }
        enter(Stage::Done);
        Ok(outcomes)
    }
}
