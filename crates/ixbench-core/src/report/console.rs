use crate::model::ScenarioOutcome;

pub fn scenario_header(name: &str) -> String {
    format!("=== {} ===", name)
}

pub fn before_line(before_ms: f64) -> String {
    format!("before index: {:.3} ms", before_ms)
}

pub fn after_line(o: &ScenarioOutcome) -> String {
    let change = match o.speedup() {
        Some(x) => format!(" (delta {:+.3} ms, {:.2}x)", o.delta_ms(), x),
        None => format!(" (delta {:+.3} ms)", o.delta_ms()),
    };
    format!("after index:  {:.3} ms{}", o.after_ms, change)
}

pub fn size_line(size: &str) -> String {
    format!("index size:   {}", size)
}

/// Fixed-width table of every scenario, one row each.
pub fn summary(results: &[ScenarioOutcome]) -> Vec<String> {
    let width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    let mut lines = vec![format!(
        "{:<width$}  {:>12}  {:>12}  {:>8}  {}",
        "scenario",
        "before ms",
        "after ms",
        "speedup",
        "index size",
        width = width
    )];
    lines.push("━".repeat(width + 50));
    for r in results {
        let speedup = r
            .speedup()
            .map(|x| format!("{:.2}x", x))
            .unwrap_or_else(|| "-".into());
        lines.push(format!(
            "{:<width$}  {:>12.3}  {:>12.3}  {:>8}  {}",
            r.name,
            r.before_ms,
            r.after_ms,
            speedup,
            r.index_size.as_deref().unwrap_or("-"),
            width = width
        ));
    }
    lines
}
