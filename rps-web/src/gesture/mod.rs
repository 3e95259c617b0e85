//! Gesture module - hand landmarks to rock / paper / scissors
//!
//! Re-exports only. All logic in submodules.

mod classify;
pub mod landmarks;

pub use classify::{classify, count_fingers_up, is_finger_up, Gesture, GESTURE_LABELS};
pub use landmarks::{HandLandmark, LandmarkSet, FINGERTIPS, HAND_FLOATS, LANDMARK_COUNT};
