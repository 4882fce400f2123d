//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! Three derived series (separate Indicator instances):
//! - Upper: middle + mult * stddev(close, period)
//! - Lower: middle - mult * stddev(close, period)
//! - Width: (upper - lower) / middle * 100
//!
//! Middle is the SMA of the same period (bit-identical to the SMA column).
//! Uses population stddev (divide by N).
//! Lookback: period - 1.

use super::sma::sma_of_series;
use super::Indicator;

/// Which Bollinger series to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    Upper,
    Lower,
    Width,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    fn with_band(period: usize, multiplier: f64, band: BollingerBand, label: &str) -> Self {
        assert!(period >= 1, "Bollinger period must be >= 1");
        Self {
            period,
            multiplier,
            band,
            name: format!("bollinger_{label}_{period}_{multiplier}"),
        }
    }

    pub fn upper(period: usize, multiplier: f64) -> Self {
        Self::with_band(period, multiplier, BollingerBand::Upper, "upper")
    }

    pub fn lower(period: usize, multiplier: f64) -> Self {
        Self::with_band(period, multiplier, BollingerBand::Lower, "lower")
    }

    pub fn width(period: usize, multiplier: f64) -> Self {
        Self::with_band(period, multiplier, BollingerBand::Width, "width")
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let middle = sma_of_series(closes, self.period);
        let mut result = vec![f64::NAN; closes.len()];

        for i in (self.period - 1)..closes.len() {
            let mean = middle[i];
            let window = &closes[i + 1 - self.period..=i];
            let variance = window
                .iter()
                .map(|c| {
                    let diff = c - mean;
                    diff * diff
                })
                .sum::<f64>()
                / self.period as f64;
            let offset = self.multiplier * variance.sqrt();
            let upper = mean + offset;
            let lower = mean - offset;

            result[i] = match self.band {
                BollingerBand::Upper => upper,
                BollingerBand::Lower => lower,
                // Width is undefined around a zero mean
                BollingerBand::Width if mean == 0.0 => f64::NAN,
                BollingerBand::Width => (upper - lower) / mean * 100.0,
            };
        }

        result
    }
}
