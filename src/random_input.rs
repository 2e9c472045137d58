use std::ops::RangeInclusive;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{InputError, Result};

pub const DEFAULT_LEN: usize = 20;
pub const DEFAULT_MIN: i32 = 1;
pub const DEFAULT_MAX: i32 = 20;

/// Pseudo-random integer supplier. Equal seeds and ranges produce equal
/// sequences.
pub struct RandomInput {
    rng: StdRng,
    range: RangeInclusive<i32>,
}

impl RandomInput {
    pub fn new(seed: u64, range: RangeInclusive<i32>) -> Result<RandomInput> {
        debug!("random input seed={} range={:?}", seed, range);
        Self::with_rng(StdRng::seed_from_u64(seed), range)
    }

    pub fn from_entropy(range: RangeInclusive<i32>) -> Result<RandomInput> {
        debug!("random input seeded from entropy range={:?}", range);
        Self::with_rng(StdRng::from_entropy(), range)
    }

    fn with_rng(rng: StdRng, range: RangeInclusive<i32>) -> Result<RandomInput> {
        // gen_range panics on an empty range
        if range.is_empty() {
            return Err(InputError::EmptyRange {
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(RandomInput { rng, range })
    }

    pub fn range(&self) -> &RangeInclusive<i32> {
        &self.range
    }

    pub fn next_value(&mut self) -> i32 {
        self.rng.gen_range(self.range.clone())
    }

    /// Overwrites every slot of `buf` with a fresh draw.
    pub fn fill(&mut self, buf: &mut [i32]) {
        for slot in buf.iter_mut() {
            *slot = self.next_value();
        }
    }

    pub fn sequence(&mut self, len: usize) -> Vec<i32> {
        let mut values = vec![0; len];
        self.fill(&mut values);
        values
    }
}

impl Default for RandomInput {
    fn default() -> Self {
        RandomInput {
            rng: StdRng::from_entropy(),
            range: DEFAULT_MIN..=DEFAULT_MAX,
        }
    }
}
