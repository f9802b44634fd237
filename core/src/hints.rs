use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Deduction hint for one row or column: total of all tile values and how many voltorbs hide there.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintPair {
    pub sum: CellCount,
    pub voltorbs: CellCount,
}

impl HintPair {
    pub const fn new(sum: CellCount, voltorbs: CellCount) -> Self {
        Self { sum, voltorbs }
    }

    fn from_line<'a>(line: impl IntoIterator<Item = &'a Tile>) -> Self {
        line.into_iter().fold(Self::default(), |hint, tile| Self {
            sum: hint.sum + CellCount::from(tile.value()),
            voltorbs: hint.voltorbs + CellCount::from(tile.is_voltorb()),
        })
    }
}

impl fmt::Display for HintPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}V", self.sum, self.voltorbs)
    }
}

/// One hint per row (top to bottom) or per column (left to right).
pub fn hints(board: &Board, axis: Axis) -> Vec<HintPair> {
    board
        .tiles()
        .axis_iter(axis.nd_axis())
        .map(|line| HintPair::from_line(line.iter()))
        .collect()
}
