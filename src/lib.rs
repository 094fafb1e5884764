//! ML-FOLD phase-configuration analysis for photonic logic gates.
//!
//! Scores candidate phase configurations of a NOR or NAND gate from their
//! four predicted output powers, derives a per-batch threshold from the best
//! score, and classifies every configuration as Optimal or Non-Optimal.

pub mod core;
pub mod data;
pub mod engine;
pub mod interface;

pub use crate::core::domain::{
    AnalysisError, Classification, GateKind, PhaseConfig, DEFAULT_THRESHOLD_FRACTION,
};
pub use crate::data::loader::{load_phase_configs, load_phase_configs_from_path, LoadError};
pub use crate::engine::classifier::{
    process_batch, BatchOutcome, BatchSummary, ClassCounts, ExcludedConfig, ScoredConfig,
};
pub use crate::engine::scorer::{
    compute_metrics, compute_score, separation_ratio, zero_state_uniformity, GateMetrics,
};
