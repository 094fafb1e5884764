use log::{debug, warn};
use serde::Serialize;

use crate::core::domain::{AnalysisError, Classification, GateKind, PhaseConfig};
use crate::engine::scorer::{self, GateMetrics};

/// A configuration that survived scoring, with its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredConfig {
    pub config: PhaseConfig,
    pub score: f64,
    pub uniformity: f64,
    pub classification: Classification,
}

/// A configuration dropped for non-finite metrics, kept for auditing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExcludedConfig {
    /// Zero-based position in the input batch.
    pub index: usize,
    pub config: PhaseConfig,
}

/// Number of valid configurations per verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClassCounts {
    pub optimal: usize,
    pub non_optimal: usize,
}

impl ClassCounts {
    pub fn total(&self) -> usize {
        self.optimal + self.non_optimal
    }
}

/// Batch-level statistics derived from the valid scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub gate: GateKind,
    pub valid_count: usize,
    pub excluded_count: usize,
    pub max_score: f64,
    pub threshold_fraction: f64,
    pub threshold: f64,
    pub counts: ClassCounts,
}

/// Everything one batch run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub scored: Vec<ScoredConfig>,
    pub excluded: Vec<ExcludedConfig>,
    pub summary: BatchSummary,
}

/// Scores a batch for one gate kind and classifies every valid configuration
/// against `max_score * threshold_fraction` (ties count as Optimal).
///
/// Configurations with non-finite metrics never reach the maximum or the
/// counts; they come back in `excluded` with their input positions so data
/// quality stays auditable. Input order is preserved on both sides of the
/// split. Returns `EmptyValidSet` when not a single configuration scored
/// finite, since no threshold exists in that case.
pub fn process_batch(
    configs: &[PhaseConfig],
    gate: GateKind,
    threshold_fraction: f64,
) -> Result<BatchOutcome, AnalysisError> {
    if !(threshold_fraction > 0.0 && threshold_fraction <= 1.0) {
        warn!(
            "threshold fraction {} is outside (0, 1]; the threshold scales with it all the same",
            threshold_fraction
        );
    }

    // 1. Score everything, splitting valid from excluded.
    let mut valid: Vec<(PhaseConfig, GateMetrics)> = Vec::with_capacity(configs.len());
    let mut excluded = Vec::new();

    for (index, config) in configs.iter().enumerate() {
        match scorer::compute_metrics(config, gate) {
            Some(metrics) => valid.push((*config, metrics)),
            None => excluded.push(ExcludedConfig {
                index,
                config: *config,
            }),
        }
    }

    if !excluded.is_empty() {
        warn!(
            "{} batch: excluded {} of {} configurations with non-finite metrics",
            gate,
            excluded.len(),
            configs.len()
        );
    }

    if valid.is_empty() {
        return Err(AnalysisError::EmptyValidSet {
            total: configs.len(),
        });
    }

    // 2. Threshold from the batch maximum (NaN cannot reach this fold).
    let max_score = valid
        .iter()
        .map(|(_, m)| m.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let threshold = max_score * threshold_fraction;

    // 3. Classification pass.
    let mut counts = ClassCounts::default();
    let mut scored = Vec::with_capacity(valid.len());

    for (config, metrics) in valid {
        let classification = if metrics.score >= threshold {
            counts.optimal += 1;
            Classification::Optimal
        } else {
            counts.non_optimal += 1;
            Classification::NonOptimal
        };
        scored.push(ScoredConfig {
            config,
            score: metrics.score,
            uniformity: metrics.uniformity,
            classification,
        });
    }

    debug!(
        "{} batch: max score {:.6}, threshold {:.6}, {} optimal / {} non-optimal",
        gate, max_score, threshold, counts.optimal, counts.non_optimal
    );

    let summary = BatchSummary {
        gate,
        valid_count: scored.len(),
        excluded_count: excluded.len(),
        max_score,
        threshold_fraction,
        threshold,
        counts,
    };

    Ok(BatchOutcome {
        scored,
        excluded,
        summary,
    })
}
