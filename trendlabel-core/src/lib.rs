//! TrendLabel Core — indicator engine, position sampling and labeling.
//!
//! This crate turns a daily OHLCV series into labeled positions:
//! - Domain types (bars, bar series, indicator snapshots, position keys, positions)
//! - Indicator battery (RSI, SMA, EMA, Bollinger, MACD) with explicit warm-up
//! - Indicator table, one row per bar
//! - Finite-space position key sampler
//! - Position builder with profit and green/red labeling
//! - Deterministic RNG hierarchy
//!
//! The crate performs no I/O.

pub mod dataset;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod position;
pub mod rng;
pub mod sampler;

pub use dataset::{generate_positions, sampler_for, SamplingParams};
pub use engine::{IndicatorEngine, IndicatorRow, IndicatorTable};
pub use error::DatasetError;
pub use position::PositionBuilder;
pub use rng::RngHierarchy;
pub use sampler::{key_space_size, PositionKeySampler};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the types handed across threads are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::BarSeries>();
        require_sync::<domain::BarSeries>();
        require_send::<domain::Position>();
        require_sync::<domain::Position>();
        require_send::<IndicatorTable>();
        require_sync::<IndicatorTable>();
        require_send::<PositionKeySampler>();
        require_sync::<PositionKeySampler>();
        require_send::<RngHierarchy>();
        require_sync::<RngHierarchy>();
        require_send::<DatasetError>();
        require_sync::<DatasetError>();
    }

    /// Architecture contract: indicators see only the close column.
    #[test]
    fn indicator_trait_takes_closes_only() {
        fn _check_trait_object_builds(ind: &dyn indicators::Indicator, closes: &[f64]) -> Vec<f64> {
            ind.compute(closes)
        }
    }
}
