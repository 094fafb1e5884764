use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::core::domain::PhaseConfig;

/// Column headers the input file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "phi_a",
    "phi_b",
    "preds_AB_0",
    "preds_A_1B_0",
    "preds_A_0B_1",
    "preds_AB_1",
];

/// Errors raised while loading configuration data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("malformed record {record}")]
    Malformed {
        /// 1-based data record number (header excluded).
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read CSV data")]
    Csv(#[from] csv::Error),
}

/// One row of the upstream prediction dump. The `preds_*` columns carry the
/// predicted output power per input state: `preds_AB_0` is A=0 B=0,
/// `preds_A_1B_0` is A=1 B=0, and so on.
#[derive(Debug, Deserialize)]
struct RawRow {
    phi_a: f64,
    phi_b: f64,
    #[serde(rename = "preds_AB_0")]
    p00: f64,
    #[serde(rename = "preds_A_1B_0")]
    p10: f64,
    #[serde(rename = "preds_A_0B_1")]
    p01: f64,
    #[serde(rename = "preds_AB_1")]
    p11: f64,
}

impl From<RawRow> for PhaseConfig {
    fn from(row: RawRow) -> Self {
        PhaseConfig {
            phi_a: row.phi_a,
            phi_b: row.phi_b,
            p00: row.p00,
            p10: row.p10,
            p01: row.p01,
            p11: row.p11,
        }
    }
}

/// Reads phase configurations from CSV data.
///
/// Headers are validated up front so a broken file fails with every absent
/// column named at once instead of a cryptic per-field error. Surrounding
/// whitespace in headers and fields is trimmed; columns beyond the required
/// set are ignored. The literal strings `NaN` and `inf` parse as the
/// matching floats and flow on to the scoring validity check.
pub fn load_phase_configs<R: Read>(reader: R) -> Result<Vec<PhaseConfig>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut missing = Vec::new();
    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name) {
            missing.push(name.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut configs = Vec::new();
    for (i, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = result.map_err(|source| LoadError::Malformed {
            record: i + 1,
            source,
        })?;
        configs.push(row.into());
    }

    Ok(configs)
}

/// Opens `path` and reads every configuration in it.
pub fn load_phase_configs_from_path(path: impl AsRef<Path>) -> Result<Vec<PhaseConfig>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let configs = load_phase_configs(file)?;
    info!(
        "loaded {} configurations from {}",
        configs.len(),
        path.display()
    );
    Ok(configs)
}
