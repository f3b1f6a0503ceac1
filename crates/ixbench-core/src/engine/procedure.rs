use crate::errors::BenchResult;
use crate::measure::Measurer;
use crate::model::{Scenario, ScenarioOutcome};
use crate::psql::Psql;
use crate::report::{console, Progress};

/// Planner statistics refresh for the whole database.
pub const REFRESH_STATS: &str = "VACUUM (ANALYZE);";

/// refresh stats -> before -> create index -> refresh stats -> after -> size.
///
/// Each timing is written to `progress` as soon as it is measured, so the
/// baseline survives a failure further on.
///
/// Index creation mutates the shared database for every later scenario.
/// DDL is expected to use `if not exists` so reruns do not fail.
pub async fn run_scenario(
    psql: &Psql<'_>,
    measurer: &Measurer<'_>,
    db: &str,
    scenario: &Scenario,
    progress: &mut dyn Progress,
) -> BenchResult<ScenarioOutcome> {
    psql.execute(db, REFRESH_STATS).await?;
    let before_ms = measurer.measure(db, &scenario.query).await?;
    tracing::info!(event = "ixbench.baseline", scenario = %scenario.name, before_ms);
    progress.line(&console::before_line(before_ms));

    if scenario.creates_index() {
        psql.execute(db, &scenario.index_ddl).await?;
    }

    psql.execute(db, REFRESH_STATS).await?;
    let after_ms = measurer.measure(db, &scenario.query).await?;
    tracing::info!(event = "ixbench.final", scenario = %scenario.name, after_ms);

    let index_size = match &scenario.size_query {
        Some(q) => Some(psql.fetch_scalar(db, q).await?),
        None => None,
    };

    let outcome = ScenarioOutcome {
        name: scenario.name.clone(),
        before_ms,
        after_ms,
        index_size,
    };
    progress.line(&console::after_line(&outcome));
    if let Some(size) = &outcome.index_size {
        progress.line(&console::size_line(size));
    }
    Ok(outcome)
}
