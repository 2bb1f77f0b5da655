use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: u8 = 8;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the other side. Applying it twice yields the original player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// `+1` for black, `-1` for white.
    pub fn sign(self) -> i8 {
        Cell::from(self) as i8
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = -1,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A board coordinate. `col` is x, `row` is y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` when either coordinate is outside the board.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        (col < BOARD_SIZE && row < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE as usize) as u8,
            col: (idx % BOARD_SIZE as usize) as u8,
        }
    }
}

/// A legal placement and every opponent stone it would flip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveCandidate {
    pub position: Position,
    /// Sorted in row-major order, never empty, no duplicates.
    pub captured: Vec<Position>,
}

impl MoveCandidate {
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Public game state handed to presentation shells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells in row-major order: 0 empty, 1 black, -1 white.
    pub board: Vec<i8>,
    pub current_player: Player,
    pub black_count: u8,
    pub white_count: u8,
    pub status: GameStatus,
    /// Contract:
    /// - `true` when the last turn boundary skipped a player with no moves.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Stones flipped by the last applied move. Empty after a pass.
    pub flipped: Vec<Position>,
    /// Legal placements for `current_player`; empty once the game is over.
    pub legal_moves: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameResult {
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        let winner = match black_count.cmp(&white_count) {
            std::cmp::Ordering::Greater => Winner::Black,
            std::cmp::Ordering::Less => Winner::White,
            std::cmp::Ordering::Equal => Winner::Draw,
        };
        Self {
            winner,
            black_count,
            white_count,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.winner {
            Winner::Black => "Black wins!",
            Winner::White => "White wins!",
            Winner::Draw => "Draw!",
        }
    }
}
