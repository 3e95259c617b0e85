//! Game integration - the single session the frame loop drives
//!
//! JS reads the three readouts back after each `apply_hand_landmarks` call.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::display;
use crate::game::{GameSession, Transition};
use crate::gesture::LandmarkSet;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<GameSession> = RefCell::new(GameSession::default());
}

fn with_session<T>(f: impl FnOnce(&mut GameSession) -> T) -> T {
    SESSION.with(|cell| f(&mut cell.borrow_mut()))
}

/// Run one frame through the session (called from hand_landmarks)
pub(crate) fn step_frame(hand: Option<&LandmarkSet>) -> Transition {
    let transition = with_session(|session| session.step(hand, &mut rand::thread_rng()));

    display::with_metrics(|m| m.record_detection(hand.is_some()));

    if let Transition::Drawn(round) = transition {
        console_log!(
            "🎲 Round: computer {} → {}",
            round.computer.name(),
            round.outcome.name()
        );
    }

    transition
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// "You: Rock" / "No hand detected"
#[wasm_bindgen]
pub fn get_sign_text() -> String {
    with_session(|s| display::sign_text(s.gesture()))
}

/// "Computer: Paper", or the bare prefix when no round is active
#[wasm_bindgen]
pub fn get_computer_text() -> String {
    with_session(|s| display::computer_text(s.round()))
}

/// "Win" / "Lose" / "Draw", or empty when no round is active
#[wasm_bindgen]
pub fn get_result_text() -> String {
    with_session(|s| display::result_text(s.round()))
}

/// CSS colour for the result readout
#[wasm_bindgen]
pub fn get_result_color() -> Option<String> {
    with_session(|s| s.round().outcome().map(|o| display::result_color(o).to_string()))
}

#[wasm_bindgen]
pub fn is_hand_present() -> bool {
    with_session(|s| s.round().hand_present())
}

/// True only on the frame that drew a new computer move
#[wasm_bindgen]
pub fn was_round_drawn() -> bool {
    with_session(|s| s.last_transition().is_drawn())
}

#[wasm_bindgen]
pub fn get_rounds_played() -> u32 {
    with_session(|s| s.round().rounds_played())
}

/// Clear the round (e.g. page hidden)
#[wasm_bindgen]
pub fn reset_round() {
    with_session(|s| s.reset());
}

/// Change how far a fingertip must clear its joint to count as raised
#[wasm_bindgen]
pub fn set_finger_margin(margin: f32) -> Result<(), JsValue> {
    with_session(|s| {
        let config = s.config().with_finger_margin(margin)?;
        s.set_config(config);
        Ok::<_, crate::error::ConfigError>(())
    })?;
    console_log!("⚙️ Finger margin set to {:.3}", margin);
    Ok(())
}
