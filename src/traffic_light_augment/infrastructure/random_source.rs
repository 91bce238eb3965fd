use crate::domain::random_source::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `RandomSource` backed by `rand`'s standard generator.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn coin_flip(&mut self) -> bool {
        self.rng.gen_range(0..=1) == 1
    }

    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.rng.gen_range(low..high)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}
