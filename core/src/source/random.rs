use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform draw over the three moves, deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomMoveSource {
    seed: u64,
    rng: SmallRng,
}

impl RandomMoveSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveSource for RandomMoveSource {
    fn next_move(&mut self) -> Move {
        let mv = Move::ALL[self.rng.random_range(0..Move::ALL.len())];
        log::trace!("Drew computer move {mv}");
        mv
    }
}
