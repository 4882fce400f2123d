//! Dataset runner: wires together loading, indicators, sampling and export.
//!
//! Two entry points:
//! - `run_dataset()`: full pipeline from a `DatasetConfig`. Used by CLI `generate`.
//! - `run_indicators()`: bars in, indicator-table CSV out. Used by CLI `indicators`.
//!
//! Every artifact is rendered in memory and only written once all positions
//! are built, so a run that fails before that leaves nothing on disk.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use trendlabel_core::{
    generate_positions, sampler_for, DatasetError, IndicatorEngine, IndicatorTable, RngHierarchy,
};

use crate::assembler::DatasetAssembler;
use crate::config::{ConfigError, DatasetConfig};
use crate::data_loader::{load_bars, LoadError};
use crate::export::{export_indicator_table_csv, write_file, write_indicator_table, ExportError};
use crate::manifest::{write_manifest, RunManifest, SCHEMA_VERSION};
use crate::summary::DatasetSummary;

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// What a completed `generate` run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: RunManifest,
    pub summary: DatasetSummary,
}

/// Load bars and compute the indicator table.
pub fn load_table(input: &Path) -> Result<IndicatorTable, RunError> {
    info!(input = %input.display(), "loading bars");
    let series = load_bars(input)?;
    info!(bars = series.len(), "bars loaded");
    let table = IndicatorEngine::new().compute(series);
    debug!(warmup = table.warmup(), "indicator table computed");
    Ok(table)
}

/// Run the full dataset pipeline described by `config`.
pub fn run_dataset(config: &DatasetConfig) -> Result<RunOutcome, RunError> {
    config.validate()?;
    let columns = config.column_layout()?;

    let table = load_table(&config.input)?;
    let dataset_hash = table.series().content_hash();

    let (hierarchy, seed_supplied) = match config.seed {
        Some(seed) => (RngHierarchy::new(seed), true),
        None => (RngHierarchy::from_entropy(), false),
    };
    if !seed_supplied {
        info!(seed = hierarchy.master_seed(), "no seed given, drew one from entropy");
    }

    let params = config.sampling_params();
    let sampler = sampler_for(&table, &params)?;
    debug!(
        key_space = sampler.key_space_size(),
        quantity = params.quantity,
        first_day = sampler.first_day(),
        max_duration = params.max_duration,
        "sampling position keys"
    );
    if !params.skip_warmup {
        warn!(
            warmup = table.warmup(),
            "positions touching rows before the warm-up day will have empty indicator cells"
        );
    }

    let positions =
        generate_positions(&table, &params, &mut hierarchy.sampler_rng(&dataset_hash))?;
    let summary = DatasetSummary::from_positions(&positions);
    debug!(green = summary.green, red = summary.red, "positions built");

    let mut assembler = DatasetAssembler::new(columns);
    assembler.extend(positions);
    let dataset_csv = assembler.to_csv_string()?;
    let indicators_csv = config
        .indicators_output
        .as_ref()
        .map(|path| export_indicator_table_csv(&table).map(|csv| (path, csv)))
        .transpose()?;

    write_file(&config.output, &dataset_csv)?;
    info!(path = %config.output.display(), rows = assembler.len(), "dataset written");
    if let Some((path, csv)) = indicators_csv {
        write_file(path, &csv)?;
        info!(path = %path.display(), rows = table.len(), "indicator table written");
    }

    let manifest = RunManifest {
        schema_version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        input: config.input.clone(),
        output: config.output.clone(),
        dataset_hash,
        seed: hierarchy.master_seed(),
        seed_supplied,
        quantity: params.quantity,
        max_duration: params.max_duration,
        skip_warmup: params.skip_warmup,
        bar_count: table.len(),
        row_count: summary.count,
        green: summary.green,
        red: summary.red,
    };
    let manifest_path = config.manifest_path();
    write_manifest(&manifest_path, &manifest)?;
    debug!(path = %manifest_path.display(), "manifest written");

    Ok(RunOutcome {
        output: config.output.clone(),
        manifest_path,
        manifest,
        summary,
    })
}

/// Compute the indicator table for `input` and write it as CSV to `output`.
pub fn run_indicators(input: &Path, output: &Path) -> Result<IndicatorTable, RunError> {
    let table = load_table(input)?;
    write_indicator_table(output, &table)?;
    info!(path = %output.display(), rows = table.len(), "indicator table written");
    Ok(table)
}
