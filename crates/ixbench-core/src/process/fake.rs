use super::{CommandOutput, CommandRunner, Invocation};
use crate::errors::BenchResult;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Handler = dyn Fn(&Invocation) -> CommandOutput + Send + Sync;

/// Deterministic runner for tests/dev: answers every invocation through a
/// handler closure and records what was asked of it.
#[derive(Clone)]
pub struct ScriptedRunner {
    handler: Arc<Handler>,
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl ScriptedRunner {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Invocation) -> CommandOutput + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every invocation exits 0 with empty output.
    pub fn always_ok() -> Self {
        Self::new(|_| CommandOutput::ok(""))
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// SQL text passed inline (`-c`) in call order.
    pub fn sql_statements(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|inv| inv.arg_after("-c").map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn spawn(&self, inv: &Invocation) -> BenchResult<CommandOutput> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(inv.clone());
        }
        Ok((self.handler)(inv))
    }
}
