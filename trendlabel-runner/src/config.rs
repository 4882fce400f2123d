//! Serializable dataset-generation configuration (TOML).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use trendlabel_core::SamplingParams;

use crate::assembler::Column;

pub const DEFAULT_QUANTITY: usize = 1000;
pub const DEFAULT_MAX_DURATION: usize = 30;

/// Errors from loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything needed to reproduce one dataset.
///
/// ```toml
/// input = "data/btc_daily.json"
/// output = "positions.csv"
/// quantity = 5000
/// max_duration = 30
/// seed = 42
/// skip_warmup = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// JSON file of `[timestamp, open, high, low, close, volume]` tuples.
    pub input: PathBuf,

    /// Dataset CSV destination.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Number of positions to generate.
    #[serde(default = "default_quantity")]
    pub quantity: usize,

    /// Maximum holding duration in days.
    #[serde(default = "default_max_duration")]
    pub max_duration: usize,

    /// Master seed. Drawn from entropy (and recorded in the manifest) when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Only open positions once every indicator is defined.
    #[serde(default)]
    pub skip_warmup: bool,

    /// Output column ordering by header name. Defaults to the full layout.
    #[serde(default)]
    pub columns: Option<Vec<String>>,

    /// Optional CSV dump of the full indicator table.
    #[serde(default)]
    pub indicators_output: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("positions.csv")
}

fn default_quantity() -> usize {
    DEFAULT_QUANTITY
}

fn default_max_duration() -> usize {
    DEFAULT_MAX_DURATION
}

impl DatasetConfig {
    /// Config with defaults for everything but the input.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: default_output(),
            quantity: DEFAULT_QUANTITY,
            max_duration: DEFAULT_MAX_DURATION,
            seed: None,
            skip_warmup: false,
            columns: None,
            indicators_output: None,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantity == 0 {
            return Err(ConfigError::Invalid("quantity must be at least 1".into()));
        }
        if self.max_duration == 0 {
            return Err(ConfigError::Invalid(
                "max_duration must be at least 1".into(),
            ));
        }
        self.column_layout()?;
        Ok(())
    }

    pub fn sampling_params(&self) -> SamplingParams {
        SamplingParams {
            quantity: self.quantity,
            max_duration: self.max_duration,
            skip_warmup: self.skip_warmup,
        }
    }

    /// Parsed output columns.
    pub fn column_layout(&self) -> Result<Vec<Column>, ConfigError> {
        let Some(names) = &self.columns else {
            return Ok(Column::default_layout());
        };
        if names.is_empty() {
            return Err(ConfigError::Invalid("columns must not be empty".into()));
        }
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let column: Column = name
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("unknown column '{name}'")))?;
            if columns.contains(&column) {
                return Err(ConfigError::Invalid(format!("duplicate column '{name}'")));
            }
            columns.push(column);
        }
        Ok(columns)
    }

    /// Manifest path: the output path with a `.manifest.json` extension.
    pub fn manifest_path(&self) -> PathBuf {
        self.output.with_extension("manifest.json")
    }
}
