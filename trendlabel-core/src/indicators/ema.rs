//! Exponential Moving Average (EMA).
//!
//! Two phases:
//! 1. Seed: EMA[period-1] = SMA of the first `period` closes.
//! 2. Recursion: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1],
//!    alpha = 2 / (period + 1).
//!
//! Lookback: period - 1. The seed choice shifts every later value, so a
//! cold start at the first close is not equivalent.

use super::Indicator;

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "EMA period must be >= 1");
        Self {
            period,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        ema_of_series(closes, self.period)
    }
}

/// Compute seeded EMA values from a pre-extracted f64 slice.
/// Used by the `Ema` indicator and by MACD.
pub fn ema_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if period == 0 || n < period {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    // Phase 1: seed with the SMA of the first `period` values
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    result[period - 1] = seed;

    // Phase 2: recursive update
    let mut prev = seed;
    for i in period..n {
        let ema = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = ema;
        prev = ema;
    }

    result
}
