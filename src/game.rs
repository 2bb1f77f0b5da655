use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::policy::{GreedySelector, MoveSelector};
use crate::types::{GameResult, GameState, GameStatus, MoveCandidate, Player, Position};

/// What happened at a turn boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// `Player` has at least one legal move and must play it.
    Move(Player),
    /// `passed` had no legal move; `next` does.
    Passed { passed: Player, next: Player },
    /// Neither side can move.
    GameOver(GameResult),
}

/// Result of a human move submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Applied(TurnOutcome),
    /// The square is not a legal move; nothing changed.
    Ignored,
}

pub struct GameInstance {
    board: Board,
    current_player: Player,
    human: Player,
    status: GameStatus,
    is_pass: bool,
    flipped: Vec<Position>,
    last_outcome: TurnOutcome,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(config: &GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        Self::from_board(Board::new(), Player::Black, config.human, selector)
    }

    pub fn with_default_selector(config: &GameConfig) -> Self {
        Self::new(config, Box::new(GreedySelector))
    }

    /// Starts from an arbitrary position. The turn boundary is resolved
    /// immediately, so `to_move` may pass or the game may already be over.
    pub fn from_board(
        board: Board,
        to_move: Player,
        human: Player,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        let mut game = Self {
            board,
            current_player: to_move,
            human,
            status: GameStatus::InProgress,
            is_pass: false,
            flipped: Vec::new(),
            last_outcome: TurnOutcome::Move(to_move),
            selector,
        };
        game.last_outcome = game.resolve_turn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Resolution of the most recent turn boundary, including the one made
    /// when the game was created.
    pub fn last_outcome(&self) -> TurnOutcome {
        self.last_outcome
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && self.current_player != self.human
    }

    /// Legal moves for the player to move. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<MoveCandidate> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player)
    }

    /// Applies the two-strikes rule for the player to move.
    ///
    /// A player without moves passes; the game ends only if the opponent has
    /// no move either.
    pub fn resolve_turn(&mut self) -> TurnOutcome {
        if self.is_game_over() {
            return TurnOutcome::GameOver(self.to_game_result());
        }

        if self.board.has_legal_move(self.current_player) {
            return TurnOutcome::Move(self.current_player);
        }

        let passed = self.current_player;
        let next = passed.opponent();
        if self.board.has_legal_move(next) {
            self.current_player = next;
            self.is_pass = true;
            self.flipped.clear();
            info!(%passed, %next, "forced pass");
            return TurnOutcome::Passed { passed, next };
        }

        self.status = GameStatus::GameOver;
        let result = self.to_game_result();
        info!(
            winner = ?result.winner,
            black = result.black_count,
            white = result.white_count,
            "game over"
        );
        TurnOutcome::GameOver(result)
    }

    /// Human move at `(col, row)`.
    ///
    /// Anything that is not a legal move for the human right now is ignored
    /// without touching the game: off-board coordinates, occupied or
    /// non-capturing squares, clicks during the computer's turn, and clicks
    /// after the game is over.
    pub fn submit_move(&mut self, col: u8, row: u8) -> SubmitOutcome {
        let candidate = if self.is_game_over() || self.current_player != self.human {
            None
        } else {
            Position::new(col, row).and_then(|pos| {
                self.board
                    .legal_moves(self.human)
                    .into_iter()
                    .find(|mv| mv.position == pos)
            })
        };

        match candidate {
            Some(candidate) => SubmitOutcome::Applied(self.play(candidate)),
            None => {
                debug!(col, row, "ignoring submission that is not a legal move");
                SubmitOutcome::Ignored
            }
        }
    }

    pub fn do_ai_move(&mut self) -> Result<TurnOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player == self.human {
            return Err(GameError::NotAiTurn);
        }

        let player = self.current_player;
        let selected = self.selector.select_move(&self.board, player)?;
        let legal = self.board.legal_moves(player);
        if !legal.contains(&selected) {
            warn!(
                col = selected.position.col,
                row = selected.position.row,
                "selector returned an illegal move"
            );
            return Err(GameError::IllegalSelection {
                col: selected.position.col,
                row: selected.position.row,
            });
        }

        Ok(self.play(selected))
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().iter().map(|&c| c as i8).collect(),
            current_player: self.current_player,
            black_count,
            white_count,
            status: self.status,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            legal_moves: self.legal_moves().into_iter().map(|mv| mv.position).collect(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult::from_counts(black_count, white_count)
    }

    fn play(&mut self, candidate: MoveCandidate) -> TurnOutcome {
        let player = self.current_player;
        self.board
            .apply_move(candidate.position, player, &candidate.captured);
        debug!(
            %player,
            col = candidate.position.col,
            row = candidate.position.row,
            flips = candidate.capture_count(),
            "move applied"
        );

        self.is_pass = false;
        self.flipped = candidate.captured;
        self.current_player = player.opponent();
        self.last_outcome = self.resolve_turn();
        self.last_outcome
    }
}
