use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Played in a tile that does not exist on the board")]
    OutOfBounds,
    #[error("This tile has already been flipped")]
    AlreadyFlipped,
    #[error("Game already ended, no new flips are accepted")]
    GameAlreadyOver,
    #[error("Board dimensions must be at least 1x1")]
    InvalidDimensions,
    #[error("Difficulty must be at least 1")]
    InvalidDifficulty,
    #[error("Difficulty asks for more voltorbs than the board can hold")]
    TooManyVoltorbs,
    #[error("Tile distribution does not match the board size")]
    DistributionMismatch,
    #[error("Tile values must be between 0 and 3")]
    InvalidTileValue,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Game state does not agree with its board")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, GameError>;
