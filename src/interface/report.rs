use crate::engine::classifier::{BatchOutcome, BatchSummary};

/// Renders the valid scored configurations as a fixed-width table.
///
/// `limit` caps the number of rows (0 means unlimited); a footer reports how
/// many rows were left out. Rounding happens here only, the outcome itself
/// keeps full precision.
pub fn render_table(outcome: &BatchOutcome, limit: usize) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "{:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>12} {:>12}  {}\n",
        "phi_a", "phi_b", "p00", "p10", "p01", "p11", "score", "uniformity", "class"
    ));

    let shown = if limit == 0 {
        outcome.scored.len()
    } else {
        limit.min(outcome.scored.len())
    };

    for entry in &outcome.scored[..shown] {
        let c = &entry.config;
        s.push_str(&format!(
            "{:>8.2} {:>8.2} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>12.6} {:>12.6}  {}\n",
            c.phi_a,
            c.phi_b,
            c.p00,
            c.p10,
            c.p01,
            c.p11,
            entry.score,
            entry.uniformity,
            entry.classification
        ));
    }

    let omitted = outcome.scored.len() - shown;
    if omitted > 0 {
        s.push_str(&format!("... {} more row(s) not shown\n", omitted));
    }

    s
}

/// Renders the batch summary block.
pub fn render_summary(summary: &BatchSummary) -> String {
    let mut s = String::new();
    s.push_str(&format!("{:<14}{}\n", "Gate:", summary.gate));
    s.push_str(&format!(
        "{:<14}{} valid, {} excluded\n",
        "Records:", summary.valid_count, summary.excluded_count
    ));
    s.push_str(&format!("{:<14}{:.6}\n", "Max score:", summary.max_score));
    s.push_str(&format!(
        "{:<14}{:.6} ({} x max)\n",
        "Threshold:", summary.threshold, summary.threshold_fraction
    ));
    s.push_str(&format!("{:<14}{}\n", "Optimal:", summary.counts.optimal));
    s.push_str(&format!(
        "{:<14}{}\n",
        "Non-Optimal:", summary.counts.non_optimal
    ));
    s
}

/// Full-precision JSON rendering of the whole outcome, excluded records
/// included, for machine consumption. Non-finite power values serialize as
/// null.
pub fn render_json(outcome: &BatchOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
