//! Bridge module - JS ↔ Rust communication
//!
//! All per-frame #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod game_integration;
mod hand_landmarks;
mod startup;

pub use hand_landmarks::{apply_hand_landmarks, clear_hand_landmarks};

pub use game_integration::{
    get_computer_text,
    get_result_color,
    get_result_text,
    get_rounds_played,
    get_sign_text,
    is_hand_present,
    reset_round,
    set_finger_margin,
    was_round_drawn,
};

pub use startup::report_startup_failure;
