use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{RandomSource, CHECK_DIE_SIDES, EVENT_DIE_SIDES};

/// Reproducible dice backed by ChaCha8
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededDice {
    fn roll_event_die(&mut self) -> u8 {
        self.rng.gen_range(1..=EVENT_DIE_SIDES)
    }

    fn roll_check(&mut self) -> u8 {
        self.rng.gen_range(1..=CHECK_DIE_SIDES)
    }
}
