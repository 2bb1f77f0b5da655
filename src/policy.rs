use crate::board::Board;
use crate::error::GameError;
use crate::types::{MoveCandidate, Player};

/// Chooses a move for the computer player.
///
/// Caller contract: `player` has at least one legal move. Implementations
/// report a violation as [`GameError::NoLegalMoves`].
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, player: Player) -> Result<MoveCandidate, GameError>;
}

/// One-ply greedy policy: flip as many stones as possible right now.
///
/// Ties go to the candidate that comes first in row-major scan order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, player: Player) -> Result<MoveCandidate, GameError> {
        let mut best: Option<MoveCandidate> = None;
        for candidate in board.legal_moves(player) {
            let better = best
                .as_ref()
                .is_none_or(|b| candidate.capture_count() > b.capture_count());
            if better {
                best = Some(candidate);
            }
        }
        best.ok_or(GameError::NoLegalMoves { player })
    }
}

/// Plays the first legal move in scan order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalSelector;

impl MoveSelector for FirstLegalSelector {
    fn select_move(&self, board: &Board, player: Player) -> Result<MoveCandidate, GameError> {
        board
            .legal_moves(player)
            .into_iter()
            .next()
            .ok_or(GameError::NoLegalMoves { player })
    }
}
