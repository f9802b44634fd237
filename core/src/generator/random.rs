use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that draws the two/three split and the tile order from a seeded `SmallRng`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let dist = distribution(config, &mut rng)?;
        log::debug!(
            "Generating {:?} board at difficulty {} with distribution {:?}",
            config.size,
            config.difficulty,
            dist.counts()
        );
        generate(config.size, &dist, &mut rng)
    }
}
