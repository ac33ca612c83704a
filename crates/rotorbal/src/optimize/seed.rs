//! Per-restart random streams.
//!
//! A restart is reproducible from `(seed, index)` alone: the pair is mixed
//! into one `StdRng` seed, so restarts can run in any order or on any thread.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Replay token for one restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RestartToken {
    pub seed: u64,
    pub index: u64,
}

impl RestartToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// SplitMix64 finalizer.
    #[inline]
    fn mix(mut x: u64) -> u64 {
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }

    /// Seed of the private stream, distinct per index.
    #[inline]
    pub fn stream_seed(self) -> u64 {
        Self::mix(self.seed ^ Self::mix(self.index.wrapping_add(0x9e3779b97f4a7c15)))
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        StdRng::seed_from_u64(self.stream_seed())
    }
}

/// Resolve the master seed; fresh entropy when none is configured.
pub(crate) fn master_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| rand::rngs::OsRng.next_u64())
}
