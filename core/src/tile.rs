use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hidden value of a single board tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Voltorb,
    One,
    Two,
    Three,
}

impl Tile {
    pub const ALL: [Tile; 4] = [Self::Voltorb, Self::One, Self::Two, Self::Three];

    pub const fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Voltorb),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(GameError::InvalidTileValue),
        }
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::Voltorb => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub const fn is_voltorb(self) -> bool {
        matches!(self, Self::Voltorb)
    }

    /// Tiles that multiply the score, i.e. the ones a win requires revealing.
    pub const fn is_multiplier(self) -> bool {
        matches!(self, Self::Two | Self::Three)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Player-visible state of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Revealed(Tile),
}

impl TileView {
    pub const HIDDEN_MARKER: &'static str = "?";

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for TileView {
    fn default() -> Self {
        Self::Hidden
    }
}

impl fmt::Display for TileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str(Self::HIDDEN_MARKER),
            Self::Revealed(tile) => write!(f, "{tile}"),
        }
    }
}
