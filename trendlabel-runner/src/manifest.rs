//! Run manifest export (JSON).
//!
//! Written next to the dataset so any run can be reproduced: the seed is
//! always recorded, including one drawn from entropy.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::export::{write_file, ExportError};

/// Current schema version for persisted manifests.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub input: PathBuf,
    pub output: PathBuf,
    /// BLAKE3 hash of the input bars.
    pub dataset_hash: String,
    pub seed: u64,
    /// False when the seed was drawn from entropy.
    pub seed_supplied: bool,
    pub quantity: usize,
    pub max_duration: usize,
    pub skip_warmup: bool,
    pub bar_count: usize,
    pub row_count: usize,
    pub green: usize,
    pub red: usize,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl RunManifest {
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(text)?)
    }
}

pub fn write_manifest(path: &Path, manifest: &RunManifest) -> Result<(), ExportError> {
    write_file(path, &manifest.to_json()?)
}
