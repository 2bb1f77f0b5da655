use std::time::Duration;

use tracing::info;
use web_time::Instant;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{GameInstance, SubmitOutcome, TurnOutcome};
use crate::layout::BoardLayout;
use crate::pacing::AiPacer;
use crate::types::{GameResult, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button press at window pixel `(x, y)`.
    Click { x: i32, y: i32 },
    Quit,
}

pub trait InputSource {
    /// Next pending event, if any. Must not block.
    fn poll(&mut self) -> Option<InputEvent>;
}

pub trait Presenter {
    fn render(&mut self, state: &GameState, message: Option<&str>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Finished(GameResult),
    Quit,
}

/// Turn loop between a [`GameInstance`] and a presentation shell.
///
/// A quit request is honoured only between moves.
pub struct Session<I, P> {
    game: GameInstance,
    layout: BoardLayout,
    pacer: AiPacer,
    input: I,
    presenter: P,
    started: bool,
}

impl<I: InputSource, P: Presenter> Session<I, P> {
    pub fn new(
        game: GameInstance,
        layout: BoardLayout,
        ai_delay: Duration,
        input: I,
        presenter: P,
    ) -> Self {
        Self {
            game,
            layout,
            pacer: AiPacer::new(ai_delay),
            input,
            presenter,
            started: false,
        }
    }

    /// Session using the layout and AI pacing from `config`.
    pub fn from_config(config: &GameConfig, game: GameInstance, input: I, presenter: P) -> Self {
        Self::new(game, config.layout(), config.ai_delay(), input, presenter)
    }

    pub fn game(&self) -> &GameInstance {
        &self.game
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Advances the session by at most one move.
    pub fn step(&mut self, now: Instant) -> Result<SessionStatus, GameError> {
        if !self.started {
            self.started = true;
            let message = outcome_message(self.game.last_outcome());
            self.render(message.as_deref());
        }
        if self.game.is_game_over() {
            return Ok(SessionStatus::Finished(self.game.to_game_result()));
        }

        let event = self.input.poll();
        if event == Some(InputEvent::Quit) {
            info!(player = %self.game.current_player(), "quit requested");
            return Ok(SessionStatus::Quit);
        }

        let outcome = if self.game.is_ai_turn() {
            self.pacer.arm(now);
            if !self.pacer.is_due(now) {
                return Ok(SessionStatus::Running);
            }
            self.pacer.reset();
            Some(self.game.do_ai_move()?)
        } else {
            match event {
                Some(InputEvent::Click { x, y }) => match self.layout.pixel_to_cell(x, y) {
                    Some(pos) => match self.game.submit_move(pos.col, pos.row) {
                        SubmitOutcome::Applied(outcome) => Some(outcome),
                        SubmitOutcome::Ignored => None,
                    },
                    None => None,
                },
                _ => None,
            }
        };

        let Some(outcome) = outcome else {
            return Ok(SessionStatus::Running);
        };
        let message = outcome_message(outcome);
        self.render(message.as_deref());

        match outcome {
            TurnOutcome::GameOver(result) => Ok(SessionStatus::Finished(result)),
            _ => Ok(SessionStatus::Running),
        }
    }

    /// Steps until the game finishes or the user quits, sleeping
    /// `poll_interval` between idle polls.
    pub fn run(&mut self, poll_interval: Duration) -> Result<SessionStatus, GameError> {
        loop {
            let status = self.step(Instant::now())?;
            if status != SessionStatus::Running {
                return Ok(status);
            }
            let wait = self
                .pacer
                .remaining(Instant::now())
                .map_or(poll_interval, |left| left.min(poll_interval));
            std::thread::sleep(wait);
        }
    }

    fn render(&mut self, message: Option<&str>) {
        let state = self.game.to_game_state();
        self.presenter.render(&state, message);
    }
}

fn outcome_message(outcome: TurnOutcome) -> Option<String> {
    match outcome {
        TurnOutcome::Move(_) => None,
        TurnOutcome::Passed { passed, .. } => Some(format!("{passed} has no moves and passes")),
        TurnOutcome::GameOver(result) => Some(result.message().to_string()),
    }
}
