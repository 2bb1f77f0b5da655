use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod layout;
pub mod pacing;
pub mod policy;
pub mod session;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::GameError;
pub use game::{GameInstance, SubmitOutcome, TurnOutcome};
pub use policy::{GreedySelector, MoveSelector};
pub use types::{Cell, MoveCandidate, Player, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
