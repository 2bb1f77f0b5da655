use thiserror::Error;

use crate::types::Player;

/// Errors raised by the rules engine, move policies, and the game controller.
///
/// A click on a non-legal square is not an error; see
/// [`SubmitOutcome::Ignored`](crate::game::SubmitOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{player} has no legal moves")]
    NoLegalMoves { player: Player },

    #[error("capture set for ({col}, {row}) does not match the board")]
    StaleCaptureSet { col: u8, row: u8 },

    #[error("cell ({col}, {row}) is already occupied")]
    OccupiedCell { col: u8, row: u8 },

    #[error("game is already over")]
    GameOver,

    #[error("it is not AI's turn")]
    NotAiTurn,

    #[error("selector picked an illegal move: ({col}, {row})")]
    IllegalSelection { col: u8, row: u8 },

    #[error("invalid board text: {0}")]
    InvalidBoardText(String),
}
