use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// How many tiles of each value a board holds, ordered `[voltorbs, ones, twos, threes]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDistribution([CellCount; 4]);

impl TileDistribution {
    pub const fn new(counts: [CellCount; 4]) -> Self {
        Self(counts)
    }

    pub const fn counts(&self) -> [CellCount; 4] {
        self.0
    }

    pub const fn voltorbs(&self) -> CellCount {
        self.0[0]
    }

    pub const fn ones(&self) -> CellCount {
        self.0[1]
    }

    pub const fn twos(&self) -> CellCount {
        self.0[2]
    }

    pub const fn threes(&self) -> CellCount {
        self.0[3]
    }

    pub fn total(&self) -> CellCount {
        self.0.iter().sum()
    }
}

impl Index<Tile> for TileDistribution {
    type Output = CellCount;

    fn index(&self, tile: Tile) -> &Self::Output {
        &self.0[usize::from(tile.value())]
    }
}

/// `floor(total * 0.3 + difficulty * 0.5)`, kept in integers so it never drifts under float rounding.
pub(crate) const fn voltorb_count(total: CellCount, difficulty: Difficulty) -> CellCount {
    let scaled = 3 * total as u32 + 5 * difficulty as u32;
    (scaled / 10) as CellCount
}

/// `floor(total * 0.75)`: the tiles that are either voltorbs or ones.
pub(crate) const fn low_tile_count(total: CellCount) -> CellCount {
    (3 * total as u32 / 4) as CellCount
}

/// Picks tile counts for a board of the configured size.
///
/// A quarter of the board (rounded up) holds multiplier tiles; the difficulty decides how many of them may be
/// threes and, together with the board size, how many of the rest are voltorbs.
pub fn distribution<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<TileDistribution> {
    if let Err(err) = config.validate() {
        log::warn!("Rejected board parameters {config:?}: {err}");
        return Err(err);
    }

    let total = config.total_tiles();
    let difficulty = CellCount::from(config.difficulty);
    let voltorbs = voltorb_count(total, config.difficulty);
    let ones = low_tile_count(total) - voltorbs;
    let multipliers = total - low_tile_count(total);

    let twos_lower_bound = multipliers.saturating_sub(difficulty);
    let twos = rng.random_range(twos_lower_bound..=multipliers);
    let threes = multipliers - twos;

    Ok(TileDistribution::new([voltorbs, ones, twos, threes]))
}

/// Lays out exactly the tiles of `distribution` in a uniformly random order, row-major.
pub fn generate<R: Rng + ?Sized>(
    size: Dim2,
    distribution: &TileDistribution,
    rng: &mut R,
) -> Result<Board> {
    if size.0 == 0 || size.1 == 0 {
        return Err(GameError::InvalidDimensions);
    }
    if distribution.total() != mult(size.0, size.1) {
        log::warn!(
            "Distribution {:?} holds {} tiles, board {:?} needs {}",
            distribution,
            distribution.total(),
            size,
            mult(size.0, size.1)
        );
        return Err(GameError::DistributionMismatch);
    }

    let mut tiles: Vec<Tile> = Tile::ALL
        .iter()
        .flat_map(|&tile| core::iter::repeat_n(tile, distribution[tile].into()))
        .collect();
    tiles.shuffle(rng);

    let tiles = Array2::from_shape_vec(size.to_nd_index(), tiles)
        .map_err(|_| GameError::InvalidBoardShape)?;
    Board::from_tiles(tiles)
}
