use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread_rng) – для боевого режима.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Один и тот же seed даёт одну и ту же сетку.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG, который лобби выдаёт на одну операцию над турниром.
#[derive(Clone, Debug)]
pub enum TournamentRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl RandomSource for TournamentRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            TournamentRng::System(rng) => rng.shuffle(slice),
            TournamentRng::Seeded(rng) => rng.shuffle(slice),
        }
    }
}
