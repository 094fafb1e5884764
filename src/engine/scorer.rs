use crate::core::domain::{GateKind, PhaseConfig};

/// The metrics computed for a single configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateMetrics {
    /// Ratio of the dominant output power(s) to the suppressed ones.
    pub score: f64,
    /// Spread of the suppressed output powers (sample standard deviation).
    pub uniformity: f64,
}

/// Separation ratio for one configuration.
///
/// NOR keeps its output high only for input 00, so p00 goes on top and the
/// three leakage states multiply in the denominator. NAND is the mirror
/// image: only input 11 must go dark, so p11 alone divides the rest.
/// Higher is better. The raw ratio may be infinite or NaN for degenerate
/// powers; [`compute_score`] and [`compute_metrics`] filter those out.
pub fn separation_ratio(config: &PhaseConfig, gate: GateKind) -> f64 {
    match gate {
        GateKind::Nor => config.p00 / (config.p10 * config.p01 * config.p11),
        GateKind::Nand => (config.p00 * config.p10 * config.p01) / config.p11,
    }
}

/// Sample standard deviation (n-1) of the three output powers the truth
/// table wants dark. Low values mean the suppressed states sit at one
/// uniform level instead of one of them leaking.
pub fn zero_state_uniformity(config: &PhaseConfig, gate: GateKind) -> f64 {
    let suppressed = match gate {
        GateKind::Nor => [config.p10, config.p01, config.p11],
        GateKind::Nand => [config.p00, config.p10, config.p01],
    };
    sample_std(&suppressed)
}

/// Score for one configuration, or `None` when the ratio is not finite.
pub fn compute_score(config: &PhaseConfig, gate: GateKind) -> Option<f64> {
    let score = separation_ratio(config, gate);
    if score.is_finite() {
        Some(score)
    } else {
        None
    }
}

/// Both metrics for one configuration, or `None` when either is non-finite.
/// This is the validity gate for the batch pipeline.
pub fn compute_metrics(config: &PhaseConfig, gate: GateKind) -> Option<GateMetrics> {
    let score = separation_ratio(config, gate);
    let uniformity = zero_state_uniformity(config, gate);
    if score.is_finite() && uniformity.is_finite() {
        Some(GateMetrics { score, uniformity })
    } else {
        None
    }
}

fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0);
    var.sqrt()
}
