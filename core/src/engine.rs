use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::num::Saturating;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Running score, replaced by a terminal marker once the game ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Score {
    Points(u64),
    Won,
    Lost,
}

impl Score {
    pub const fn points(self) -> Option<u64> {
        match self {
            Self::Points(points) => Some(points),
            Self::Won | Self::Lost => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Folds a revealed safe tile into the running points.
    fn after_reveal(self, tile: Tile) -> Self {
        match self {
            // only reachable before the first safe flip, since every safe tile is worth at least 1
            Self::Points(0) => Self::Points(tile.value().into()),
            Self::Points(points) => Self::Points(points.saturating_mul(tile.value().into())),
            terminal => terminal,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::Points(0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(points) => write!(f, "{points}"),
            Self::Won => f.write_str("YOU WIN"),
            Self::Lost => f.write_str("YOU LOSE"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Revealed(Tile),
    HitVoltorb,
    Won,
}

impl FlipOutcome {
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitVoltorb | Self::Won)
    }
}

/// A single game: the hidden board, what the player has uncovered so far and the score it earned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameModelRepr")]
pub struct GameModel {
    board: Board,
    distribution: TileDistribution,
    difficulty: Option<Difficulty>,
    revealed: Array2<bool>,
    revealed_count: Saturating<CellCount>,
    hidden_multipliers: Saturating<CellCount>,
    row_hints: Vec<HintPair>,
    col_hints: Vec<HintPair>,
    score: Score,
    state: GameState,
}

#[derive(Deserialize)]
struct GameModelRepr {
    board: Board,
    distribution: TileDistribution,
    difficulty: Option<Difficulty>,
    revealed: Array2<bool>,
    revealed_count: Saturating<CellCount>,
    hidden_multipliers: Saturating<CellCount>,
    row_hints: Vec<HintPair>,
    col_hints: Vec<HintPair>,
    score: Score,
    state: GameState,
}

impl TryFrom<GameModelRepr> for GameModel {
    type Error = GameError;

    /// Rebuilds the game from its board and revealed mask, then requires every stored field to agree with it.
    fn try_from(repr: GameModelRepr) -> Result<Self> {
        if repr.distribution != repr.board.distribution() {
            return Err(GameError::DistributionMismatch);
        }
        if repr.revealed.dim() != repr.board.tiles().dim() {
            return Err(GameError::InvalidBoardShape);
        }

        let mut game = Self::with_parts(repr.board, repr.distribution, repr.difficulty);
        let mut voltorbs_hit = 0;
        for (index, &flipped) in repr.revealed.indexed_iter() {
            if !flipped {
                continue;
            }
            let tile = game.board[[index.0, index.1]];
            game.revealed[index] = true;
            game.revealed_count += 1;
            if tile.is_voltorb() {
                voltorbs_hit += 1;
                continue;
            }
            if tile.is_multiplier() {
                game.hidden_multipliers -= 1;
            }
            game.score = game.score.after_reveal(tile);
        }

        // the first voltorb ends the game, so a second one can never be face up
        if voltorbs_hit > 1 {
            return Err(GameError::InconsistentState);
        }
        let hit_voltorb = voltorbs_hit == 1;
        let state = if hit_voltorb {
            GameState::Lost
        } else if game.hidden_multipliers.0 == 0 && game.revealed_count.0 > 0 {
            GameState::Won
        } else {
            GameState::Playing
        };
        if state.is_finished() {
            game.state = state;
            game.score = if hit_voltorb { Score::Lost } else { Score::Won };
        }

        let consistent = repr.revealed_count == game.revealed_count
            && repr.hidden_multipliers == game.hidden_multipliers
            && repr.row_hints == game.row_hints
            && repr.col_hints == game.col_hints
            && repr.score == game.score
            && repr.state == game.state;
        if consistent {
            Ok(game)
        } else {
            Err(GameError::InconsistentState)
        }
    }
}

impl GameModel {
    /// Starts a game on a fresh board, drawing all randomness from `rng`.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        let distribution = distribution(config, rng)?;
        let board = generate(config.size, &distribution, rng)?;
        Ok(Self::with_parts(board, distribution, Some(config.difficulty)))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, &mut SmallRng::seed_from_u64(seed))
    }

    pub fn from_generator<G: BoardGenerator>(generator: G, config: GameConfig) -> Result<Self> {
        let board = generator.generate(config)?;
        let distribution = board.distribution();
        Ok(Self::with_parts(board, distribution, Some(config.difficulty)))
    }

    /// Starts a game on a fixed board. There is no difficulty behind such a board.
    pub fn from_board(board: Board) -> Self {
        let distribution = board.distribution();
        Self::with_parts(board, distribution, None)
    }

    fn with_parts(
        board: Board,
        distribution: TileDistribution,
        difficulty: Option<Difficulty>,
    ) -> Self {
        let row_hints = board.hints(Axis::Rows);
        let col_hints = board.hints(Axis::Cols);
        let revealed = Array2::default(board.size().to_nd_index());
        let hidden_multipliers = distribution.twos() + distribution.threes();
        Self {
            board,
            distribution,
            difficulty,
            revealed,
            revealed_count: Saturating(0),
            hidden_multipliers: Saturating(hidden_multipliers),
            row_hints,
            col_hints,
            score: Score::default(),
            state: GameState::default(),
        }
    }

    pub fn size(&self) -> Dim2 {
        self.board.size()
    }

    pub fn length(&self) -> Dim {
        self.board.length()
    }

    pub fn width(&self) -> Dim {
        self.board.width()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn distribution(&self) -> TileDistribution {
        self.distribution
    }

    pub fn row_hints(&self) -> &[HintPair] {
        &self.row_hints
    }

    pub fn col_hints(&self) -> &[HintPair] {
        &self.col_hints
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    /// Twos and threes still face down; the game is won when this reaches zero.
    pub fn remaining_multipliers(&self) -> CellCount {
        self.hidden_multipliers.0
    }

    /// Score reached by revealing every multiplier tile.
    pub fn max_score(&self) -> u64 {
        self.board
            .iter()
            .filter(|tile| tile.is_multiplier())
            .fold(1, |acc: u64, tile| acc.saturating_mul(tile.value().into()))
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        Ok(self.revealed[self.board.validate_coords(coords)?])
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<TileView> {
        let index = self.board.validate_coords(coords)?;
        Ok(if self.revealed[index] {
            TileView::Revealed(self.board[index])
        } else {
            TileView::Hidden
        })
    }

    /// Text shown on a tile: its value once flipped, `?` before.
    pub fn describe(&self, coords: Coord2) -> Result<String> {
        Ok(self.tile_at(coords)?.to_string())
    }

    /// Reveals the tile at `(row, col)`.
    ///
    /// Checks run in a fixed order: bounds, then whether the tile is already face up, then whether the game has
    /// ended. On error nothing changes.
    pub fn flip(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        let index = self.board.validate_coords(coords)?;
        if self.revealed[index] {
            return Err(GameError::AlreadyFlipped);
        }
        if self.state.is_finished() {
            return Err(GameError::GameAlreadyOver);
        }

        self.revealed[index] = true;
        self.revealed_count += 1;
        let tile = self.board[index];
        log::trace!("Flipped {coords:?}: {tile:?}");

        if tile.is_voltorb() {
            self.end_game(GameState::Lost);
            return Ok(FlipOutcome::HitVoltorb);
        }

        self.score = self.score.after_reveal(tile);

        if tile.is_multiplier() {
            self.hidden_multipliers -= 1;
        }

        if self.hidden_multipliers.0 == 0 {
            self.end_game(GameState::Won);
            Ok(FlipOutcome::Won)
        } else {
            Ok(FlipOutcome::Revealed(tile))
        }
    }

    fn end_game(&mut self, state: GameState) {
        let score = match state {
            GameState::Won => Score::Won,
            GameState::Lost => Score::Lost,
            GameState::Playing => return,
        };
        log::debug!(
            "Game ended {:?} with score {} after {} flips",
            state,
            self.score,
            self.revealed_count
        );
        self.state = state;
        self.score = score;
    }
}

fn write_hints(f: &mut fmt::Formatter<'_>, hints: &[HintPair]) -> fmt::Result {
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "({hint})")?;
    }
    writeln!(f)
}

impl fmt::Display for GameModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{}", self.board)?;
        writeln!(f, "Flipped:")?;
        for row in self.revealed.rows() {
            for &flipped in row {
                write!(f, "{}|", u8::from(flipped))?;
            }
            writeln!(f)?;
        }
        write!(f, "Row Data: ")?;
        write_hints(f, &self.row_hints)?;
        write!(f, "Col Data: ")?;
        write_hints(f, &self.col_hints)?;
        write!(f, "Score: {}", self.score)
    }
}
