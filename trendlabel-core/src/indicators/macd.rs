//! Moving Average Convergence-Divergence (MACD) line.
//!
//! MACD = EMA(fast) - EMA(slow), both seeded EMAs from `ema_of_series`.
//! Only the line is produced; the signal window is recorded in the name so
//! that differently configured variants stay distinguishable.
//! Lookback: max(fast, slow) - 1.

use super::ema::ema_of_series;
use super::Indicator;

#[derive(Debug, Clone)]
pub struct Macd {
    slow: usize,
    fast: usize,
    signal: usize,
    name: String,
}

impl Macd {
    pub fn new(slow: usize, fast: usize, signal: usize) -> Self {
        assert!(slow >= 1 && fast >= 1, "MACD windows must be >= 1");
        Self {
            slow,
            fast,
            signal,
            name: format!("macd_{slow}_{fast}_{signal}"),
        }
    }

    pub fn signal(&self) -> usize {
        self.signal
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.slow.max(self.fast).saturating_sub(1)
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let fast = ema_of_series(closes, self.fast);
        let slow = ema_of_series(closes, self.slow);
        // NaN in either leg keeps the line undefined
        fast.iter().zip(&slow).map(|(f, s)| f - s).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_is_fast_minus_slow() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let macd = Macd::new(26, 12, 9).compute(&closes);
        let fast = ema_of_series(&closes, 12);
        let slow = ema_of_series(&closes, 26);

        for i in 0..25 {
            assert!(macd[i].is_nan(), "expected NaN at day {i}");
        }
        for i in 25..40 {
            assert_eq!(macd[i], fast[i] - slow[i]);
        }
    }

    #[test]
    fn macd_rising_series_is_positive() {
        let closes: Vec<f64> = (0..60).map(|i| 10.0 + i as f64).collect();
        let macd = Macd::new(26, 12, 9).compute(&closes);
        assert!(macd[25..].iter().all(|&v| v > 0.0));
    }

    #[test]
    fn macd_lookback_and_name() {
        let macd = Macd::new(200, 50, 20);
        assert_eq!(macd.lookback(), 199);
        assert_eq!(macd.name(), "macd_200_50_20");
        assert_eq!(macd.signal(), 20);
    }
}
