use crate::errors::BenchResult;
use crate::explain::TimingExtractor;
use crate::psql::Psql;

/// Discarded runs before sampling starts.
pub const WARMUP_RUNS: usize = 1;
/// Counted runs averaged into one result.
pub const MEASURED_RUNS: usize = 3;

/// Runs a query under analyzed execution and reduces the samples to a mean.
///
/// Runs are strictly sequential: concurrent executions against the same
/// database contend for the buffer cache.
pub struct Measurer<'a> {
    psql: &'a Psql<'a>,
    timing: &'a dyn TimingExtractor,
}

impl<'a> Measurer<'a> {
    pub fn new(psql: &'a Psql<'a>, timing: &'a dyn TimingExtractor) -> Self {
        Self { psql, timing }
    }

    async fn sample(&self, db: &str, analyzed: &str) -> BenchResult<f64> {
        let report = self.psql.execute(db, analyzed).await?;
        self.timing.execution_time_ms(&report)
    }

    /// Mean execution time in ms over [`MEASURED_RUNS`] runs, rounded to
    /// 3 decimals. The warm-up report is still parsed, so a malformed
    /// report fails before any sample is taken.
    pub async fn measure(&self, db: &str, query: &str) -> BenchResult<f64> {
        let analyzed = self.timing.analyzed_form(query);

        for _ in 0..WARMUP_RUNS {
            self.sample(db, &analyzed).await?;
        }

        let mut samples = [0.0; MEASURED_RUNS];
        for s in samples.iter_mut() {
            *s = self.sample(db, &analyzed).await?;
        }
        tracing::debug!(event = "ixbench.samples", ?samples);

        Ok(mean_rounded(&samples))
    }
}

/// Arithmetic mean rounded to 3 decimal places. No outlier rejection.
/// The sample count is fixed by the type, so there is no empty case.
pub fn mean_rounded(samples: &[f64; MEASURED_RUNS]) -> f64 {
    let mean = samples.iter().sum::<f64>() / MEASURED_RUNS as f64;
    round3(mean)
}

pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rounded() {
        assert_eq!(mean_rounded(&[10.111, 10.222, 10.555]), 10.296);
        assert_eq!(mean_rounded(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean_rounded(&[0.1, 0.1, 0.1005]), 0.1);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(2.40749), 2.407);
        assert_eq!(round3(0.0004), 0.0);
    }
}
