// 🎲 Random Source - capability seam for every random draw
// Production wraps rand's thread RNG, tests inject seeded or scripted values

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// RandomSource - the only way generators obtain randomness
///
/// No cryptographic guarantee is needed. Implementations must return a value
/// in `low..=high`.
pub trait RandomSource {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform decimal digit 0-9
    fn digit(&mut self) -> u8 {
        self.range_inclusive(0, 9) as u8
    }
}

/// Adapter over any `rand::Rng`
#[derive(Debug)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    /// Fresh entropy per run
    pub fn thread() -> Self {
        RngSource::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for fixtures
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

/// ScriptedSource - replays a fixed sequence of draws
///
/// Each value is clamped into the requested range. Once the script runs out
/// every further draw yields `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        ScriptedSource {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        match self.values.pop_front() {
            Some(v) => v.clamp(low, high),
            None => low,
        }
    }
}
