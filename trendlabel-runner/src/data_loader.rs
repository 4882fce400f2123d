//! Bar loading from JSON kline dumps.
//!
//! Input is a JSON array of `[timestamp, open, high, low, close, volume]`
//! tuples. Exchange dumps encode prices as strings, so every entry may be a
//! JSON number or a numeric string. Trailing tuple elements (close time,
//! trade count, ...) are ignored.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use trendlabel_core::domain::{Bar, BarError, BarSeries};

/// Number of leading tuple elements that carry the bar.
const BAR_FIELDS: usize = 6;

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read bars from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed bar JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bar {index}: {reason}")]
    Shape { index: usize, reason: String },

    #[error("invalid bar series: {0}")]
    Bars(#[from] BarError),
}

/// Read and parse a bar file.
pub fn load_bars(path: &Path) -> Result<BarSeries, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bars(&text)
}

/// Parse a JSON bar array into a validated series.
pub fn parse_bars(text: &str) -> Result<BarSeries, LoadError> {
    let rows: Vec<Vec<Value>> = serde_json::from_str(text)?;
    let bars = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BarSeries::new(bars)?)
}

fn parse_row(index: usize, row: &[Value]) -> Result<Bar, LoadError> {
    if row.len() < BAR_FIELDS {
        return Err(LoadError::Shape {
            index,
            reason: format!("expected at least {BAR_FIELDS} elements, found {}", row.len()),
        });
    }
    let number = |pos: usize, name: &str| -> Result<f64, LoadError> {
        as_f64(&row[pos]).ok_or_else(|| LoadError::Shape {
            index,
            reason: format!("{name} is not numeric: {}", row[pos]),
        })
    };

    let timestamp = as_i64(&row[0]).ok_or_else(|| LoadError::Shape {
        index,
        reason: format!("timestamp is not an integer: {}", row[0]),
    })?;

    Ok(Bar {
        timestamp,
        open: number(1, "open")?,
        high: number(2, "high")?,
        low: number(3, "low")?,
        close: number(4, "close")?,
        volume: number(5, "volume")?,
    })
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            // 2^63 itself is out of range; `as` would saturate.
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_numbers_and_strings() {
        let json = r#"[
            [1514764800000, "13715.65", "13818.55", "12750.00", "13380.00", "8609.915844", 1514851199999],
            [1514851200000, 13382.16, 14659.99, 13202.0, 14675.11, 20078.09]
        ]"#;
        let series = parse_bars(json).unwrap();
        assert_eq!(series.len(), 2);
        let first = series.get(0).unwrap();
        assert_eq!(first.timestamp, 1_514_764_800_000);
        assert_eq!(first.open, 13715.65);
        assert_eq!(first.volume, 8609.915844);
        assert!((series.get(1).unwrap().close - 14675.11).abs() < 1e-9);
    }

    #[test]
    fn short_tuple_rejected() {
        let err = parse_bars("[[1, 2, 3, 4, 5]]").unwrap_err();
        assert!(matches!(err, LoadError::Shape { index: 0, .. }));
    }

    #[test]
    fn non_numeric_entry_rejected() {
        let err = parse_bars(r#"[[1, "abc", 2, 3, 4, 5]]"#).unwrap_err();
        match err {
            LoadError::Shape { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("open"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_array_is_empty_series() {
        assert!(matches!(
            parse_bars("[]").unwrap_err(),
            LoadError::Bars(BarError::Empty)
        ));
    }

    #[test]
    fn descending_timestamps_rejected() {
        let json = "[[2, 1, 1, 1, 1, 1], [1, 1, 1, 1, 1, 1]]";
        assert!(matches!(
            parse_bars(json).unwrap_err(),
            LoadError::Bars(BarError::NonAscendingTimestamp { index: 1, .. })
        ));
    }

    #[test]
    fn float_timestamps_must_fit_i64() {
        let series = parse_bars("[[1514764800000.0, 1, 1, 1, 1, 1]]").unwrap();
        assert_eq!(series.get(0).unwrap().timestamp, 1_514_764_800_000);

        for ts in ["1e19", "-1e19", "9223372036854775808.0"] {
            let err = parse_bars(&format!("[[{ts}, 1, 1, 1, 1, 1]]")).unwrap_err();
            assert!(
                matches!(
                    err,
                    LoadError::Shape { index: 0, ref reason } if reason.contains("timestamp")
                ),
                "{ts}: {err}"
            );
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_bars(Path::new("/nonexistent/bars.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    proptest! {
        #[test]
        fn string_and_number_encodings_agree(
            price in 0.01..1_000_000.0_f64,
            timestamp in 0i64..4_000_000_000_000,
        ) {
            let json = format!(
                r#"[[{timestamp}, "{price}", {price}, "{price}", {price}, "{price}"]]"#
            );
            let series = parse_bars(&json).unwrap();
            let bar = series.get(0).unwrap();
            prop_assert_eq!(bar.timestamp, timestamp);
            prop_assert_eq!(bar.open, price);
            prop_assert!((bar.high - price).abs() <= price * 1e-12);
            prop_assert_eq!(bar.volume, price);
        }
    }
}
