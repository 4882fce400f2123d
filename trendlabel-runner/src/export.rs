//! CSV and JSON export helpers.
//!
//! Provides:
//! - the indicator table as CSV (one row per bar, bar fields plus every
//!   indicator column)
//! - whole-file writes shared by the dataset and manifest writers

use std::path::{Path, PathBuf};

use thiserror::Error;
use trendlabel_core::domain::IndicatorField;
use trendlabel_core::IndicatorTable;

use crate::assembler::format_value;

/// Errors from rendering or writing artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flush an in-memory CSV writer into a String.
pub(crate) fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let data = wtr
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8(data)?)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)
}

/// Export the indicator table as CSV.
///
/// Columns: TIMESTAMP, DATE, OPEN, HIGH, LOW, CLOSE, VOLUME, PROFIT_TOTAL,
/// PROFIT_PERCENTAGE, then every indicator field in column order.
pub fn export_indicator_table_csv(table: &IndicatorTable) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<String> = [
        "TIMESTAMP",
        "DATE",
        "OPEN",
        "HIGH",
        "LOW",
        "CLOSE",
        "VOLUME",
        "PROFIT_TOTAL",
        "PROFIT_PERCENTAGE",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend(IndicatorField::ALL.iter().map(|f| f.column_name().to_string()));
    wtr.write_record(&header)?;

    for row in table.rows() {
        let bar = row.bar;
        let mut record = vec![
            bar.timestamp.to_string(),
            bar.date()
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.volume.to_string(),
            bar.profit_total().to_string(),
            format_value(bar.profit_percent()),
        ];
        record.extend(row.indicators.iter().map(|(_, v)| format_value(v)));
        wtr.write_record(&record)?;
    }

    finish_csv(wtr)
}

/// Render and write the indicator table CSV to `path`.
pub fn write_indicator_table(path: &Path, table: &IndicatorTable) -> Result<(), ExportError> {
    let text = export_indicator_table_csv(table)?;
    write_file(path, &text)
}
