//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a lookback window.
//! Lookback: period - 1 (first valid value at index period-1).

use super::Indicator;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        sma_of_series(closes, self.period)
    }
}

/// Trailing mean of `values` over `period`, `NaN` before index `period - 1`.
///
/// Shared with Bollinger so that its middle band is bit-identical to the
/// SMA column of the same period.
pub fn sma_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if period == 0 || n < period {
        return result;
    }

    // Initial window sum
    let mut sum: f64 = values[..period].iter().sum();
    result[period - 1] = sum / period as f64;

    // Roll the window forward
    for i in period..n {
        sum += values[i] - values[i - period];
        result[i] = sum / period as f64;
    }

    result
}
