//! Position builder: one key plus the indicator table gives one labeled
//! position.

use crate::domain::{Position, PositionClass, PositionKey};
use crate::engine::IndicatorTable;
use crate::error::DatasetError;

/// Builds positions from keys.
///
/// A key addressing a day outside the table is a sampler bug and panics.
/// In strict mode an undefined indicator at either endpoint is an
/// `InvalidInput` error; otherwise the `None` marker is carried into the
/// position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionBuilder {
    strict: bool,
}

impl PositionBuilder {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Builder that requires every indicator to be defined at both endpoints.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn build(
        &self,
        key: PositionKey,
        table: &IndicatorTable,
    ) -> Result<Position, DatasetError> {
        assert_eq!(
            key.close_day,
            key.open_day + key.duration,
            "malformed position key {key:?}"
        );
        let open = table.row(key.open_day).unwrap_or_else(|| {
            panic!(
                "open day {} out of range for table of {} rows",
                key.open_day,
                table.len()
            )
        });
        let close = table.row(key.close_day).unwrap_or_else(|| {
            panic!(
                "close day {} out of range for table of {} rows",
                key.close_day,
                table.len()
            )
        });

        let open_price = open.close();
        let close_price = close.close();
        if open_price == 0.0 {
            return Err(DatasetError::ZeroOpenPrice { day: key.open_day });
        }

        // Past the warm-up day a value can still be undefined for data
        // reasons, e.g. Bollinger width over a zero-mean window.
        if self.strict {
            for row in [&open, &close] {
                if !row.indicators.is_complete() {
                    return Err(DatasetError::InvalidInput(format!(
                        "day {} has undefined indicators {:?}",
                        row.day,
                        row.indicators.missing()
                    )));
                }
            }
        }

        let profit = close_price - open_price;

        Ok(Position {
            open_day: key.open_day,
            close_day: key.close_day,
            duration: key.duration,
            profit,
            profit_percent: 100.0 * profit / open_price,
            open_price,
            close_price,
            open: open.indicators,
            close: close.indicators,
            class: PositionClass::from_prices(open_price, close_price),
        })
    }

    /// Build every key in order. The first failure aborts the whole batch.
    pub fn build_all(
        &self,
        keys: &[PositionKey],
        table: &IndicatorTable,
    ) -> Result<Vec<Position>, DatasetError> {
        keys.iter().map(|&key| self.build(key, table)).collect()
    }
}
