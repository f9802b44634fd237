#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use hints::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod hints;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Dim2,
    pub difficulty: Difficulty,
}

impl GameConfig {
    /// Side of the traditional square board.
    pub const CLASSIC_SIDE: Dim = 5;

    pub const fn new_unchecked(size: Dim2, difficulty: Difficulty) -> Self {
        Self { size, difficulty }
    }

    pub fn new(size: Dim2, difficulty: Difficulty) -> Result<Self> {
        let config = Self::new_unchecked(size, difficulty);
        config.validate()?;
        Ok(config)
    }

    /// Traditional 5x5 board at the given difficulty.
    pub fn classic(difficulty: Difficulty) -> Result<Self> {
        Self::new((Self::CLASSIC_SIDE, Self::CLASSIC_SIDE), difficulty)
    }

    pub const fn length(&self) -> Dim {
        self.size.0
    }

    pub const fn width(&self) -> Dim {
        self.size.1
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Checks dimensions, difficulty and that the voltorb count leaves room for the other tiles.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.difficulty == 0 {
            return Err(GameError::InvalidDifficulty);
        }
        let total = self.total_tiles();
        if generator::voltorb_count(total, self.difficulty) > generator::low_tile_count(total) {
            return Err(GameError::TooManyVoltorbs);
        }
        Ok(())
    }
}

/// Immutable grid of tile values, indexed `[row, col]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    tiles: Array2<Tile>,
}

#[derive(Deserialize)]
struct BoardRepr {
    tiles: Array2<Tile>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        Self::from_tiles(repr.tiles)
    }
}

impl Board {
    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (length, width) = tiles.dim();
        if length == 0 || width == 0 || length > Dim::MAX.into() || width > Dim::MAX.into() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles })
    }

    /// Builds a board from flat row-major tile values.
    pub fn from_values(size: Dim2, values: &[u8]) -> Result<Self> {
        let tiles = values
            .iter()
            .map(|&value| Tile::from_value(value))
            .collect::<Result<Vec<_>>>()?;
        let tiles = Array2::from_shape_vec(size.to_nd_index(), tiles)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_tiles(tiles)
    }

    /// Builds a board from one slice of values per row; all rows must have the same width.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return Err(GameError::InvalidBoardShape);
        }
        let length = Dim::try_from(rows.len()).map_err(|_| GameError::InvalidBoardShape)?;
        let width = Dim::try_from(width).map_err(|_| GameError::InvalidBoardShape)?;
        let values: Vec<u8> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::from_values((length, width), &values)
    }

    pub fn size(&self) -> Dim2 {
        let (length, width) = self.tiles.dim();
        // from_tiles guarantees both fit
        (
            length.try_into().unwrap_or(Dim::MAX),
            width.try_into().unwrap_or(Dim::MAX),
        )
    }

    pub fn length(&self) -> Dim {
        self.size().0
    }

    pub fn width(&self) -> Dim {
        self.size().1
    }

    pub fn total_tiles(&self) -> CellCount {
        let (length, width) = self.size();
        mult(length, width)
    }

    /// Maps signed coordinates to an array index, or fails when they fall off the board.
    pub fn validate_coords(&self, (row, col): Coord2) -> Result<[usize; 2]> {
        let (length, width) = self.tiles.dim();
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) if row < length && col < width => Ok([row, col]),
            _ => Err(GameError::OutOfBounds),
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        Ok(self[self.validate_coords(coords)?])
    }

    pub fn count(&self, tile: Tile) -> CellCount {
        self.tiles
            .iter()
            .filter(|&&t| t == tile)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn distribution(&self) -> TileDistribution {
        TileDistribution::new(Tile::ALL.map(|tile| self.count(tile)))
    }

    pub fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    pub fn hints(&self, axis: Axis) -> Vec<HintPair> {
        hints(self, axis)
    }
}

impl Index<[usize; 2]> for Board {
    type Output = Tile;

    fn index(&self, index: [usize; 2]) -> &Self::Output {
        &self.tiles[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{tile}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn config_rejects_degenerate_parameters() {
        assert_eq!(GameConfig::new((0, 5), 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((5, 0), 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((5, 5), 0), Err(GameError::InvalidDifficulty));
        assert!(GameConfig::classic(8).is_ok());
    }

    #[test]
    fn config_rejects_difficulty_that_overflows_low_tiles() {
        // 5x5: voltorbs = (75 + 5d) / 10 must stay <= 18
        assert!(GameConfig::classic(22).is_ok());
        assert_eq!(GameConfig::classic(23), Err(GameError::TooManyVoltorbs));
        // 1x1 holds no low tiles at all, but difficulty 1 asks for none
        assert!(GameConfig::new((1, 1), 1).is_ok());
        assert_eq!(GameConfig::new((1, 1), 2), Err(GameError::TooManyVoltorbs));
    }

    #[test]
    fn config_serializes() {
        let config = GameConfig::classic(3).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"size":[5,5],"difficulty":3}"#);
    }

    #[test]
    fn board_from_rows_is_row_major() {
        let board = Board::from_rows(&[[1u8, 2, 3], [0, 0, 1]]).unwrap();

        assert_eq!(board.size(), (2, 3));
        assert_eq!(board.tile_at((0, 2)), Ok(Tile::Three));
        assert_eq!(board.tile_at((1, 0)), Ok(Tile::Voltorb));
        assert_eq!(board.distribution().counts(), [2, 2, 1, 1]);
    }

    #[test]
    fn board_rejects_bad_input() {
        assert_eq!(
            Board::from_rows(&[&[1u8, 2][..], &[1u8][..]]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows::<[u8; 0]>(&[]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows(&[[1u8, 4]]),
            Err(GameError::InvalidTileValue)
        );
        assert_eq!(
            Board::from_values((2, 2), &[1, 1, 1]),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn board_coords_outside_are_rejected() {
        let board = Board::from_rows(&[[1u8, 2], [0, 3]]).unwrap();

        assert_eq!(board.validate_coords((1, 1)), Ok([1, 1]));
        assert_eq!(board.validate_coords((-1, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.validate_coords((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.validate_coords((0, 2)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn board_deserialization_checks_shape() {
        let board = Board::from_rows(&[[1u8, 2], [0, 3]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let empty = r#"{"tiles":{"v":1,"dim":[0,0],"data":[]}}"#;
        assert!(serde_json::from_str::<Board>(empty).is_err());
    }

    #[test]
    fn board_display_lists_rows() {
        let board = Board::from_rows(&[[1u8, 2], [0, 3]]).unwrap();
        assert_eq!(board.to_string(), "1|2|\n0|3|\n");
    }
}
