//! Before/after index benchmarking for the Krusty CRM PostgreSQL database.
//!
//! A run brings the database service up, rebuilds and loads the target
//! database, then measures each fixed [`catalog::Case`] before and after its
//! index is created.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod explain;
pub mod measure;
pub mod model;
pub mod process;
pub mod psql;
pub mod readiness;
pub mod report;

pub use engine::driver::Driver;
pub use errors::{BenchError, BenchResult};
