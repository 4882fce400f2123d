//! Errors raised while turning an indicator table into positions.

use thiserror::Error;

/// Recoverable dataset-generation failures.
///
/// Contract violations (a key addressing a day outside the table) are not
/// represented here: they indicate a sampler bug and panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid input: open price at day {day} is zero, profit percent is undefined")]
    ZeroOpenPrice { day: usize },

    #[error(
        "sampling exhausted: requested {requested} distinct positions but only {available} exist"
    )]
    SamplingExhausted { requested: usize, available: usize },
}
