//! Indicator engine: computes the standard battery over a bar series.
//!
//! All indicators are computed once, up front, over the close column.
//! Families are independent pure functions, so they run in parallel; the
//! resulting table is then queried by day index.

use rayon::prelude::*;

use crate::domain::{Bar, BarSeries, IndicatorField, IndicatorSnapshot};
use crate::indicators::{Bollinger, Ema, Indicator, Macd, Rsi, Sma};

pub const RSI_WINDOW: usize = 20;
pub const BOLLINGER_WINDOW: usize = 20;

/// Indicator implementation backing a field of the standard battery.
pub fn indicator_for(field: IndicatorField) -> Box<dyn Indicator> {
    match field {
        IndicatorField::Rsi => Box::new(Rsi::new(RSI_WINDOW)),
        IndicatorField::Sma20 => Box::new(Sma::new(20)),
        IndicatorField::Sma50 => Box::new(Sma::new(50)),
        IndicatorField::Sma100 => Box::new(Sma::new(100)),
        IndicatorField::Sma200 => Box::new(Sma::new(200)),
        IndicatorField::Ema20 => Box::new(Ema::new(20)),
        IndicatorField::Ema50 => Box::new(Ema::new(50)),
        IndicatorField::Ema100 => Box::new(Ema::new(100)),
        IndicatorField::Ema200 => Box::new(Ema::new(200)),
        IndicatorField::BbHigh1 => Box::new(Bollinger::upper(BOLLINGER_WINDOW, 1.0)),
        IndicatorField::BbHigh2 => Box::new(Bollinger::upper(BOLLINGER_WINDOW, 2.0)),
        IndicatorField::BbLow1 => Box::new(Bollinger::lower(BOLLINGER_WINDOW, 1.0)),
        IndicatorField::BbLow2 => Box::new(Bollinger::lower(BOLLINGER_WINDOW, 2.0)),
        IndicatorField::BbWidth1 => Box::new(Bollinger::width(BOLLINGER_WINDOW, 1.0)),
        IndicatorField::BbWidth2 => Box::new(Bollinger::width(BOLLINGER_WINDOW, 2.0)),
        IndicatorField::MacdDefault => Box::new(Macd::new(26, 12, 9)),
        IndicatorField::Macd200_50_20 => Box::new(Macd::new(200, 50, 20)),
    }
}

/// Computes every `IndicatorField` for a bar series.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorEngine;

impl IndicatorEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the indicator table for `series`. Consumes the series; the
    /// table owns the bars from here on.
    pub fn compute(&self, series: BarSeries) -> IndicatorTable {
        let closes = series.closes();

        let computed: Vec<(Vec<f64>, usize)> = IndicatorField::ALL
            .par_iter()
            .map(|&field| {
                let indicator = indicator_for(field);
                let values = indicator.compute(&closes);
                debug_assert_eq!(
                    values.len(),
                    closes.len(),
                    "indicator '{}' produced {} values for {} bars",
                    indicator.name(),
                    values.len(),
                    closes.len()
                );
                (values, indicator.lookback())
            })
            .collect();

        let warmup = computed.iter().map(|(_, lookback)| *lookback).max().unwrap_or(0);
        let columns = computed.into_iter().map(|(values, _)| values).collect();

        IndicatorTable {
            series,
            columns,
            warmup,
        }
    }
}

/// One row of the indicator table: the bar plus every indicator value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub day: usize,
    pub bar: Bar,
    pub indicators: IndicatorSnapshot,
}

impl IndicatorRow {
    pub fn close(&self) -> f64 {
        self.bar.close
    }
}

/// Bars plus precomputed indicator columns, addressed by day index.
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    series: BarSeries,
    /// One column per `IndicatorField`, in `IndicatorField::ALL` order.
    columns: Vec<Vec<f64>>,
    warmup: usize,
}

impl IndicatorTable {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series(&self) -> &BarSeries {
        &self.series
    }

    /// Maximum lookback across the battery: the first day from which every
    /// indicator has had enough history.
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Raw column for a field (`NaN` during warm-up).
    pub fn column(&self, field: IndicatorField) -> &[f64] {
        &self.columns[field.index()]
    }

    /// Value of `field` at `day`; `None` if undefined or out of range.
    pub fn value(&self, field: IndicatorField, day: usize) -> Option<f64> {
        self.columns[field.index()]
            .get(day)
            .copied()
            .filter(|v| !v.is_nan())
    }

    /// Row at `day`, or `None` past the end of the table.
    pub fn row(&self, day: usize) -> Option<IndicatorRow> {
        let bar = *self.series.get(day)?;
        let mut values = [None; IndicatorField::COUNT];
        for field in IndicatorField::ALL {
            values[field.index()] = self.value(field, day);
        }
        Some(IndicatorRow {
            day,
            bar,
            indicators: IndicatorSnapshot::new(values),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = IndicatorRow> + '_ {
        (0..self.len()).filter_map(move |day| self.row(day))
    }
}
