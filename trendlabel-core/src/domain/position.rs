//! Position keys and labeled position records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::snapshot::IndicatorSnapshot;

/// A (open day, close day) pair addressing two rows of the indicator table.
///
/// Invariants: `close_day == open_day + duration` and `duration >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionKey {
    pub open_day: usize,
    pub close_day: usize,
    pub duration: usize,
}

impl PositionKey {
    /// Build a key from an open day and a holding duration.
    pub fn new(open_day: usize, duration: usize) -> Self {
        debug_assert!(duration >= 1, "position duration must be >= 1");
        Self {
            open_day,
            close_day: open_day + duration,
            duration,
        }
    }

    /// Identity used for deduplication within one sampling run.
    pub fn day_pair(&self) -> (usize, usize) {
        (self.open_day, self.close_day)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.open_day, self.close_day)
    }
}

/// Directional class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionClass {
    /// Close price at or above the open price.
    Green,
    /// Close price strictly below the open price.
    Red,
}

impl PositionClass {
    /// Label a move. A flat move (equal prices) is green.
    pub fn from_prices(open_close: f64, close_close: f64) -> Self {
        if open_close <= close_close {
            PositionClass::Green
        } else {
            PositionClass::Red
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PositionClass::Green => "green",
            PositionClass::Red => "red",
        }
    }
}

impl fmt::Display for PositionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled training example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub open_day: usize,
    pub close_day: usize,
    pub duration: usize,
    pub profit: f64,
    pub profit_percent: f64,
    pub open_price: f64,
    pub close_price: f64,
    pub open: IndicatorSnapshot,
    pub close: IndicatorSnapshot,
    pub class: PositionClass,
}

impl Position {
    pub fn key(&self) -> PositionKey {
        PositionKey {
            open_day: self.open_day,
            close_day: self.close_day,
            duration: self.duration,
        }
    }
}
