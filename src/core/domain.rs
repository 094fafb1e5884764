use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// --- Constants ---
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.8;

// --- Gate Types ---

/// Logic gate families the pipeline can analyse.
///
/// The kind decides which output states count as "on" and which must be
/// suppressed, and therefore which scoring formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateKind {
    Nor,
    Nand,
}

impl GateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateKind::Nor => "NOR",
            GateKind::Nand => "NAND",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GateKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NOR" => Ok(GateKind::Nor),
            "NAND" => Ok(GateKind::Nand),
            _ => Err(AnalysisError::InvalidGateKind(s.trim().to_string())),
        }
    }
}

// --- The Core Entity ---

/// A candidate phase configuration with its four predicted output powers.
///
/// Powers are linear transmission values, one per input state of the gate.
/// They are expected non-negative but not enforced here: zeros, negatives
/// and NaNs all pass through and are handled by the scoring validity check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseConfig {
    pub phi_a: f64, // degrees
    pub phi_b: f64, // degrees
    pub p00: f64,   // output power, input A=0 B=0
    pub p10: f64,   // output power, input A=1 B=0
    pub p01: f64,   // output power, input A=0 B=1
    pub p11: f64,   // output power, input A=1 B=1
}

/// Verdict assigned to a configuration relative to the batch threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Optimal,
    #[serde(rename = "Non-Optimal")]
    NonOptimal,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Optimal => f.write_str("Optimal"),
            Classification::NonOptimal => f.write_str("Non-Optimal"),
        }
    }
}

// --- Errors ---

/// Errors that abort a batch analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("unknown gate kind '{0}' (expected NOR or NAND)")]
    InvalidGateKind(String),

    #[error("none of the {total} configurations produced a finite score, threshold is undefined")]
    EmptyValidSet { total: usize },
}
