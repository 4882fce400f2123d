//! Domain types for TrendLabel

pub mod bar;
pub mod position;
pub mod snapshot;

pub use bar::{Bar, BarError, BarSeries};
pub use position::{Position, PositionClass, PositionKey};
pub use snapshot::{IndicatorField, IndicatorSnapshot, UnknownField};
