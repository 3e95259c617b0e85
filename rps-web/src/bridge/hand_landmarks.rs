//! Hand landmark entry point - one call per detection frame
//!
//! JS passes MediaPipe's hand landmarks as a flat Float32Array
//! (hands × 21 landmarks × x, y, z) plus the number of hands found.
//! Only the first hand plays.

use wasm_bindgen::prelude::*;
use crate::gesture::LandmarkSet;
use super::game_integration::step_frame;

/// First hand from the frame buffer, or `None` for a no-hand frame.
///
/// A malformed buffer is logged and treated as no hand so the loop keeps running.
fn parse_frame(flat_data: &[f32], num_hands: usize) -> Option<LandmarkSet> {
    if num_hands == 0 {
        return None;
    }

    match LandmarkSet::from_flat(flat_data) {
        Ok(set) => Some(set),
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            None
        }
    }
}

/// Called from JavaScript after every hand landmarker detection
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) {
    let hand = parse_frame(flat_data, num_hands);
    step_frame(hand.as_ref());
}

/// Explicit "no hand this frame" for JS paths that skip the buffer
#[wasm_bindgen]
pub fn clear_hand_landmarks() {
    step_frame(None);
}
