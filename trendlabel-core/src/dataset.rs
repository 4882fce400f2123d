//! Sampling plus labeling: indicator table in, positions out.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::Position;
use crate::engine::IndicatorTable;
use crate::error::DatasetError;
use crate::position::PositionBuilder;
use crate::sampler::PositionKeySampler;

/// Parameters of one dataset draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Number of distinct positions to generate.
    pub quantity: usize,
    /// Maximum holding duration in days.
    pub max_duration: usize,
    /// Only open positions on days where every indicator is defined.
    pub skip_warmup: bool,
}

/// Sampler configured for `table` under `params`.
pub fn sampler_for(
    table: &IndicatorTable,
    params: &SamplingParams,
) -> Result<PositionKeySampler, DatasetError> {
    let sampler = PositionKeySampler::new(table.len(), params.max_duration)?;
    Ok(if params.skip_warmup {
        sampler.starting_at(table.warmup())
    } else {
        sampler
    })
}

/// Sample `params.quantity` distinct keys and build a position for each.
///
/// Either every position is built or an error is returned; there are no
/// partial results.
pub fn generate_positions<R: Rng + ?Sized>(
    table: &IndicatorTable,
    params: &SamplingParams,
    rng: &mut R,
) -> Result<Vec<Position>, DatasetError> {
    let sampler = sampler_for(table, params)?;
    let keys = sampler.sample(params.quantity, rng)?;
    let builder = if params.skip_warmup {
        PositionBuilder::strict()
    } else {
        PositionBuilder::new()
    };
    builder.build_all(&keys, table)
}
