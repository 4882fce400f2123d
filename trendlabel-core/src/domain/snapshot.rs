//! Indicator fields and per-day indicator snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One derived series of the standard indicator battery.
///
/// Declaration order is the column order used everywhere (indicator table,
/// position snapshots, dataset CSV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorField {
    Rsi,
    Sma20,
    Sma50,
    Sma100,
    Sma200,
    Ema20,
    Ema50,
    Ema100,
    Ema200,
    BbHigh1,
    BbHigh2,
    BbLow1,
    BbLow2,
    BbWidth1,
    BbWidth2,
    MacdDefault,
    Macd200_50_20,
}

impl IndicatorField {
    pub const COUNT: usize = 17;

    pub const ALL: [IndicatorField; Self::COUNT] = [
        IndicatorField::Rsi,
        IndicatorField::Sma20,
        IndicatorField::Sma50,
        IndicatorField::Sma100,
        IndicatorField::Sma200,
        IndicatorField::Ema20,
        IndicatorField::Ema50,
        IndicatorField::Ema100,
        IndicatorField::Ema200,
        IndicatorField::BbHigh1,
        IndicatorField::BbHigh2,
        IndicatorField::BbLow1,
        IndicatorField::BbLow2,
        IndicatorField::BbWidth1,
        IndicatorField::BbWidth2,
        IndicatorField::MacdDefault,
        IndicatorField::Macd200_50_20,
    ];

    /// Column name, e.g. `SMA_20` or `BB_WIDTH_2`.
    pub fn column_name(self) -> &'static str {
        match self {
            IndicatorField::Rsi => "RSI",
            IndicatorField::Sma20 => "SMA_20",
            IndicatorField::Sma50 => "SMA_50",
            IndicatorField::Sma100 => "SMA_100",
            IndicatorField::Sma200 => "SMA_200",
            IndicatorField::Ema20 => "EMA_20",
            IndicatorField::Ema50 => "EMA_50",
            IndicatorField::Ema100 => "EMA_100",
            IndicatorField::Ema200 => "EMA_200",
            IndicatorField::BbHigh1 => "BB_HIGH_1",
            IndicatorField::BbHigh2 => "BB_HIGH_2",
            IndicatorField::BbLow1 => "BB_LOW_1",
            IndicatorField::BbLow2 => "BB_LOW_2",
            IndicatorField::BbWidth1 => "BB_WIDTH_1",
            IndicatorField::BbWidth2 => "BB_WIDTH_2",
            IndicatorField::MacdDefault => "MACD_DEFAULT",
            IndicatorField::Macd200_50_20 => "MACD_200_50_20",
        }
    }

    /// Position of this field in [`IndicatorField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IndicatorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Error returned when a column name does not match any indicator field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown indicator field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for IndicatorField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorField::ALL
            .into_iter()
            .find(|f| f.column_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Every indicator value for one day.
///
/// `None` marks a warm-up value: the indicator had too little history to
/// produce a number. It is never conflated with zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    values: [Option<f64>; IndicatorField::COUNT],
}

impl IndicatorSnapshot {
    pub fn new(values: [Option<f64>; IndicatorField::COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, field: IndicatorField) -> Option<f64> {
        self.values[field.index()]
    }

    /// True when every field carries a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Fields without a value, in column order.
    pub fn missing(&self) -> Vec<IndicatorField> {
        IndicatorField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndicatorField, Option<f64>)> + '_ {
        IndicatorField::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}
