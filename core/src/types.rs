use serde::{Deserialize, Serialize};

/// Board dimension, used for the number of rows or columns.
pub type Dim = u8;

/// Two-dimensional board size `(length, width)`, i.e. rows then columns.
pub type Dim2 = (Dim, Dim);

/// Signed position on a single axis, so that callers can pass positions that fall off the board.
pub type Coord = i16;

/// Position `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Count type used for tile counts and total-tile counts.
pub type CellCount = u16;

/// Difficulty knob, always at least 1.
pub type Difficulty = u8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Dim2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Dim, b: Dim) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Direction along which hints are collected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Rows,
    Cols,
}

impl Axis {
    pub(crate) const fn nd_axis(self) -> ndarray::Axis {
        match self {
            Self::Rows => ndarray::Axis(0),
            Self::Cols => ndarray::Axis(1),
        }
    }
}
