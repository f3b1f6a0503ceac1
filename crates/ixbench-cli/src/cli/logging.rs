use tracing_subscriber::{fmt, EnvFilter};

const FALLBACK_LEVEL: &str = "warn";

/// Filter for `--log-level`; an unparsable value falls back to `warn`
/// instead of aborting the run.
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|e| {
        eprintln!(
            "WARN: ignoring invalid log level {:?} ({}), using {}",
            log_level, e, FALLBACK_LEVEL
        );
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

/// One JSON object per event on stderr. Stdout carries only `[ixbench]`
/// progress and results. The run has no spans, so only event fields are
/// emitted.
pub fn init_logging(log_level: &str) {
    let installed = fmt()
        .with_env_filter(log_filter(log_level))
        .json()
        .flatten_event(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = installed {
        eprintln!("WARN: logging not initialised: {}", e);
    }
}
