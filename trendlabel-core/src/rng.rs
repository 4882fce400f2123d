//! Deterministic RNG hierarchy.
//!
//! A master seed generates deterministic sub-seeds for each
//! `(dataset_hash, stream)` pair. Sub-seeds are derived via BLAKE3 hashing,
//! so the same master seed over the same input always samples the same keys,
//! while a different input dataset gets an unrelated stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Stream label for position key sampling.
pub const SAMPLER_STREAM: &str = "position-keys";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Hierarchy with a master seed drawn from OS entropy. Record
    /// `master_seed()` to reproduce the run.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a specific (dataset, stream).
    pub fn sub_seed(&self, dataset_hash: &str, stream: &str) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(dataset_hash.as_bytes());
        hasher.update(stream.as_bytes());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Create a seeded StdRng from a sub-seed.
    pub fn rng_for(&self, dataset_hash: &str, stream: &str) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(dataset_hash, stream))
    }

    /// RNG for the position key sampler.
    pub fn sampler_rng(&self, dataset_hash: &str) -> StdRng {
        self.rng_for(dataset_hash, SAMPLER_STREAM)
    }
}
