//! Position key sampler.
//!
//! Draws distinct `(open_day, close_day)` pairs with a bounded holding
//! duration. The size of the valid key space is computed before any draw,
//! so a request that cannot be satisfied fails immediately instead of
//! spinning forever.
//!
//! Two paths:
//! - sparse (quantity at most half the key space): rejection sampling with
//!   open day uniform, then duration uniform under the cap, duplicates
//!   discarded
//! - dense: enumerate every valid key and draw without replacement

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::domain::PositionKey;
use crate::error::DatasetError;

/// Sampling parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionKeySampler {
    total_rows: usize,
    max_duration: usize,
    first_day: usize,
}

impl PositionKeySampler {
    /// Sampler over a table of `total_rows` days. Open days start at 0.
    pub fn new(total_rows: usize, max_duration: usize) -> Result<Self, DatasetError> {
        if total_rows <= 1 {
            return Err(DatasetError::InvalidInput(
                "total indicators must be more than 1".into(),
            ));
        }
        if max_duration == 0 {
            return Err(DatasetError::InvalidInput(
                "maximum position duration must be at least 1".into(),
            ));
        }
        Ok(Self {
            total_rows,
            max_duration,
            first_day: 0,
        })
    }

    /// Restrict open days to `first_day..`. Used to keep warm-up rows out of
    /// the dataset.
    pub fn starting_at(mut self, first_day: usize) -> Self {
        self.first_day = first_day;
        self
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn max_duration(&self) -> usize {
        self.max_duration
    }

    pub fn first_day(&self) -> usize {
        self.first_day
    }

    /// Number of distinct valid keys.
    pub fn key_space_size(&self) -> usize {
        key_space_size(self.total_rows, self.max_duration, self.first_day)
    }

    /// Duration cap for a given open day.
    fn cap(&self, open_day: usize) -> usize {
        self.max_duration.min(self.total_rows - 1 - open_day)
    }

    /// Draw `quantity` distinct keys, in acceptance order.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        quantity: usize,
        rng: &mut R,
    ) -> Result<Vec<PositionKey>, DatasetError> {
        let available = self.key_space_size();
        if quantity > available {
            return Err(DatasetError::SamplingExhausted {
                requested: quantity,
                available,
            });
        }
        if quantity == 0 {
            return Ok(Vec::new());
        }

        if quantity * 2 > available {
            Ok(self.sample_dense(quantity, rng))
        } else {
            Ok(self.sample_sparse(quantity, rng))
        }
    }

    fn sample_sparse<R: Rng + ?Sized>(&self, quantity: usize, rng: &mut R) -> Vec<PositionKey> {
        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(quantity);
        let mut keys = Vec::with_capacity(quantity);
        let last_open = self.total_rows - 2;

        while keys.len() < quantity {
            let open_day = rng.gen_range(self.first_day..=last_open);
            let duration = rng.gen_range(1..=self.cap(open_day));
            let key = PositionKey::new(open_day, duration);
            if seen.insert(key.day_pair()) {
                keys.push(key);
            }
        }

        keys
    }

    fn sample_dense<R: Rng + ?Sized>(&self, quantity: usize, rng: &mut R) -> Vec<PositionKey> {
        let mut all = self.enumerate();
        let (chosen, _) = all.partial_shuffle(rng, quantity);
        chosen.to_vec()
    }

    /// Every valid key, ordered by open day then duration.
    pub fn enumerate(&self) -> Vec<PositionKey> {
        let mut keys = Vec::with_capacity(self.key_space_size());
        if self.total_rows < 2 {
            return keys;
        }
        for open_day in self.first_day..=self.total_rows - 2 {
            for duration in 1..=self.cap(open_day) {
                keys.push(PositionKey::new(open_day, duration));
            }
        }
        keys
    }
}

/// Number of distinct `(open_day, close_day)` pairs with open day in
/// `first_day..=total_rows-2` and duration in `1..=min(max_duration, total_rows-1-open_day)`.
pub fn key_space_size(total_rows: usize, max_duration: usize, first_day: usize) -> usize {
    if total_rows < 2 {
        return 0;
    }
    (first_day..=total_rows - 2)
        .map(|open_day| max_duration.min(total_rows - 1 - open_day))
        .sum()
}
