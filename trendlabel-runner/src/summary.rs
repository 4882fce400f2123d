//! Summary statistics over a generated dataset.

use std::fmt;

use serde::{Deserialize, Serialize};
use trendlabel_core::domain::{Position, PositionClass};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub count: usize,
    pub green: usize,
    pub red: usize,
    /// Share of green positions in [0, 1]; 0 for an empty dataset.
    pub green_ratio: f64,
    pub mean_profit_percent: f64,
    pub min_profit_percent: f64,
    pub max_profit_percent: f64,
    pub mean_duration: f64,
}

impl DatasetSummary {
    pub fn from_positions(positions: &[Position]) -> Self {
        let count = positions.len();
        if count == 0 {
            return Self {
                count: 0,
                green: 0,
                red: 0,
                green_ratio: 0.0,
                mean_profit_percent: 0.0,
                min_profit_percent: 0.0,
                max_profit_percent: 0.0,
                mean_duration: 0.0,
            };
        }

        let green = positions
            .iter()
            .filter(|p| p.class == PositionClass::Green)
            .count();
        let n = count as f64;
        let profit_sum: f64 = positions.iter().map(|p| p.profit_percent).sum();
        let duration_sum: usize = positions.iter().map(|p| p.duration).sum();
        let min_profit_percent = positions
            .iter()
            .map(|p| p.profit_percent)
            .fold(f64::INFINITY, f64::min);
        let max_profit_percent = positions
            .iter()
            .map(|p| p.profit_percent)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            green,
            red: count - green,
            green_ratio: green as f64 / n,
            mean_profit_percent: profit_sum / n,
            min_profit_percent,
            max_profit_percent,
            mean_duration: duration_sum as f64 / n,
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Positions:       {}", self.count)?;
        writeln!(
            f,
            "Green / Red:     {} / {} ({:.1}% green)",
            self.green,
            self.red,
            self.green_ratio * 100.0
        )?;
        writeln!(
            f,
            "Profit %:        mean {:.2}  min {:.2}  max {:.2}",
            self.mean_profit_percent, self.min_profit_percent, self.max_profit_percent
        )?;
        write!(f, "Mean duration:   {:.1} days", self.mean_duration)
    }
}
