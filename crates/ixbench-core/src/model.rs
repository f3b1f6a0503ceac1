/// One fixed benchmark case: a query measured before and after an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub query: String,
    /// Empty means "no index": the query is simply measured twice.
    pub index_ddl: String,
    pub size_query: Option<String>,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        query: impl Into<String>,
        index_ddl: impl Into<String>,
        size_query: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            index_ddl: index_ddl.into(),
            size_query,
        }
    }

    pub fn creates_index(&self) -> bool {
        !self.index_ddl.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub before_ms: f64,
    pub after_ms: f64,
    /// Pretty-printed size, e.g. `"2208 kB"`.
    pub index_size: Option<String>,
}

impl ScenarioOutcome {
    /// Negative when the index made the query faster.
    pub fn delta_ms(&self) -> f64 {
        crate::measure::round3(self.after_ms - self.before_ms)
    }

    /// before / after; `None` when `after` rounds to zero.
    pub fn speedup(&self) -> Option<f64> {
        if self.after_ms > 0.0 {
            Some(self.before_ms / self.after_ms)
        } else {
            None
        }
    }
}
