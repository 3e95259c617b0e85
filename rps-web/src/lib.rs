//! RPS Web - rock-paper-scissors against the webcam
//!
//! Entry point for WASM module. JS owns the camera, the MediaPipe hand
//! landmarker and canvas drawing; each detection frame it calls
//! `apply_hand_landmarks` and reads the readouts back:
//!
//! ```text
//! detect → apply_hand_landmarks(flat, numHands)
//!        → get_sign_text / get_computer_text / get_result_text
//!        → requestAnimationFrame(detect)
//! ```

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod gesture;
mod bridge;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    apply_hand_landmarks,
    clear_hand_landmarks,
    get_computer_text,
    get_result_color,
    get_result_text,
    get_rounds_played,
    get_sign_text,
    is_hand_present,
    report_startup_failure,
    reset_round,
    set_finger_margin,
    was_round_drawn,
};
pub use display::{get_debug_overlay_text, set_detection_latency, set_frame_metrics, tick_frame};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ RPS game module loaded");
}
