//! Indicator trait and concrete implementations.
//!
//! Indicators are pure functions: close-price history in, numeric series out.
//! Every series has the same length as its input; warm-up positions hold
//! `f64::NAN`, which the indicator table turns into an explicit `None`.
//!
//! Multi-series indicators (Bollinger) are exposed as separate named
//! instances per band, keeping the single-series `Indicator` trait unchanged.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::{Bollinger, BollingerBand};
pub use ema::{ema_of_series, Ema};
pub use macd::Macd;
pub use rsi::Rsi;
pub use sma::{sma_of_series, Sma};

/// Trait for indicators over the close-price column.
///
/// # Look-ahead contamination guard
/// No value at day t may depend on a close from day t+1 or later.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "macd_26_12_9").
    fn name(&self) -> &str;

    /// Number of leading days without a meaningful value.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire close series.
    ///
    /// Returns a `Vec<f64>` of the same length as `closes`, `NaN` where the
    /// value is undefined.
    fn compute(&self, closes: &[f64]) -> Vec<f64>;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
