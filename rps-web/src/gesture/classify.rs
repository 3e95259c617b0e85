//! Finger-count gesture classifier
//!
//! Counts raised non-thumb fingers and buckets the count into a hand sign.
//! Coarse on purpose: 1 and 3 fingers both land on `Unknown`, which is what
//! keeps an ambiguous pose from committing a round.

use super::landmarks::{finger_base, LandmarkSet, FINGERTIPS};
use crate::game::Choice;

/// Gesture labels (display order matches the page)
pub const GESTURE_LABELS: [&str; 4] = ["Rock", "Paper", "Scissors", "Unknown"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

impl Gesture {
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::Rock => GESTURE_LABELS[0],
            Gesture::Paper => GESTURE_LABELS[1],
            Gesture::Scissors => GESTURE_LABELS[2],
            Gesture::Unknown => GESTURE_LABELS[3],
        }
    }

    /// Playable move for this gesture, `None` for `Unknown`
    pub fn as_choice(&self) -> Option<Choice> {
        match self {
            Gesture::Rock => Some(Choice::Rock),
            Gesture::Paper => Some(Choice::Paper),
            Gesture::Scissors => Some(Choice::Scissors),
            Gesture::Unknown => None,
        }
    }

    /// Bucket a raised-finger count
    pub fn from_finger_count(count: usize) -> Self {
        match count {
            0 => Gesture::Rock,
            2 => Gesture::Scissors,
            n if n >= 4 => Gesture::Paper,
            _ => Gesture::Unknown,
        }
    }
}

impl From<Choice> for Gesture {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Rock => Gesture::Rock,
            Choice::Paper => Gesture::Paper,
            Choice::Scissors => Gesture::Scissors,
        }
    }
}

/// A finger is up when its tip sits above its PIP joint by more than `margin`.
///
/// Image y grows downward, so "above" is a smaller y.
pub fn is_finger_up(landmarks: &LandmarkSet, tip: usize, margin: f32) -> bool {
    landmarks[tip].y + margin < landmarks[finger_base(tip)].y
}

/// Number of raised non-thumb fingers (0-4)
pub fn count_fingers_up(landmarks: &LandmarkSet, margin: f32) -> usize {
    FINGERTIPS
        .iter()
        .filter(|&&tip| is_finger_up(landmarks, tip, margin))
        .count()
}

/// Classify one frame's hand pose
pub fn classify(landmarks: &LandmarkSet, margin: f32) -> Gesture {
    Gesture::from_finger_count(count_fingers_up(landmarks, margin))
}
