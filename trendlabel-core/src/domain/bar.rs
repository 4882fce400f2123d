//! Bar and BarSeries — the fundamental market data units.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLCV bar for a single trading day.
///
/// `timestamp` is milliseconds since the Unix epoch, as delivered by
/// exchange kline dumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// UTC date-time of the bar, or `None` if the timestamp is out of range.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Returns true if every OHLCV field is a finite number.
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Intrabar move: close − open.
    pub fn profit_total(&self) -> f64 {
        self.close - self.open
    }

    /// Intrabar move as a percentage of the open. `None` when open is zero.
    pub fn profit_percent(&self) -> Option<f64> {
        if self.open == 0.0 {
            None
        } else {
            Some(100.0 * self.profit_total() / self.open)
        }
    }
}

/// Structural problems with a bar sequence.
#[derive(Debug, Error, PartialEq)]
pub enum BarError {
    #[error("bar series is empty")]
    Empty,

    #[error("timestamp at index {index} is not after the previous bar ({previous} >= {current})")]
    NonAscendingTimestamp {
        index: usize,
        previous: i64,
        current: i64,
    },

    #[error("bar at index {index} has a non-finite OHLCV value")]
    NonFinite { index: usize },
}

/// Ordered, indexed sequence of bars.
///
/// The index of a bar in the series is its day number; every downstream
/// lookup (indicator rows, position keys) is addressed by it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Validate and wrap a bar vector. Timestamps must be strictly ascending.
    pub fn new(bars: Vec<Bar>) -> Result<Self, BarError> {
        if bars.is_empty() {
            return Err(BarError::Empty);
        }
        for (index, bar) in bars.iter().enumerate() {
            if !bar.is_finite() {
                return Err(BarError::NonFinite { index });
            }
            if index > 0 && bars[index - 1].timestamp >= bar.timestamp {
                return Err(BarError::NonAscendingTimestamp {
                    index,
                    previous: bars[index - 1].timestamp,
                    current: bar.timestamp,
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn get(&self, day: usize) -> Option<&Bar> {
        self.bars.get(day)
    }

    /// Close-price column.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// BLAKE3 content hash over every bar field, hex-encoded.
    ///
    /// Two series hash equal iff they hold bit-identical bars in the same order.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for bar in &self.bars {
            hasher.update(&bar.timestamp.to_le_bytes());
            for v in [bar.open, bar.high, bar.low, bar.close, bar.volume] {
                hasher.update(&v.to_bits().to_le_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}
