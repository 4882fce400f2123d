//! TrendLabel Runner — dataset generation runs on top of `trendlabel-core`.
//!
//! This crate provides:
//! - TOML configuration with validation
//! - JSON bar loading (numbers or numeric strings)
//! - Dataset assembly and CSV export, plus the indicator-table CSV
//! - The generate pipeline with a reproducibility manifest
//! - Summary statistics for printing

pub mod assembler;
pub mod config;
pub mod data_loader;
pub mod export;
pub mod manifest;
pub mod runner;
pub mod summary;

pub use assembler::{Column, DatasetAssembler, UnknownColumn};
pub use config::{ConfigError, DatasetConfig};
pub use data_loader::{load_bars, parse_bars, LoadError};
pub use export::{export_indicator_table_csv, write_indicator_table, ExportError};
pub use manifest::{write_manifest, RunManifest, SCHEMA_VERSION};
pub use runner::{load_table, run_dataset, run_indicators, RunError, RunOutcome};
pub use summary::DatasetSummary;

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn run_types_are_send_sync() {
        assert_send::<DatasetConfig>();
        assert_sync::<DatasetConfig>();
        assert_send::<RunOutcome>();
        assert_sync::<RunOutcome>();
        assert_send::<DatasetAssembler>();
        assert_sync::<DatasetAssembler>();
    }

    #[test]
    fn errors_are_send_sync() {
        assert_send::<RunError>();
        assert_sync::<RunError>();
    }
}
