use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::{GameInstance, SubmitOutcome};
use crate::types::Player;

/// Browser-facing wrapper around `GameInstance`.
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// New game with the greedy computer player. `human_is_black` picks the
    /// human's colour.
    #[wasm_bindgen(constructor)]
    pub fn new(human_is_black: bool) -> WasmGame {
        let config = GameConfig {
            human: if human_is_black {
                Player::Black
            } else {
                Player::White
            },
            ..GameConfig::default()
        };
        WasmGame {
            inner: GameInstance::with_default_selector(&config),
        }
    }

    /// Full `GameState` snapshot as a JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    /// Legal moves for the side to move as `[{ position, captured }]`.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.legal_moves())?)
    }

    /// Human move. Returns `false`, leaving the game untouched, when the
    /// square is not a legal move right now.
    pub fn place(&mut self, col: u8, row: u8) -> bool {
        matches!(
            self.inner.submit_move(col, row),
            SubmitOutcome::Applied(_)
        )
    }

    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<(), JsValue> {
        self.inner
            .do_ai_move()
            .map(|_| ())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    #[wasm_bindgen(js_name = isAiTurn)]
    pub fn is_ai_turn(&self) -> bool {
        self.inner.is_ai_turn()
    }

    /// Final result, or `null` while the game is in progress.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        if !self.inner.is_game_over() {
            return Ok(JsValue::NULL);
        }
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }
}
