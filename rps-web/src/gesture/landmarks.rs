//! Hand landmark set (MediaPipe Hands - 21 points)
//!
//! JS hands us a flat Float32Array per frame; this module turns it into a
//! fixed-size set the classifier can index by anatomical position.

use crate::error::LandmarkError;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand
pub const LANDMARK_COUNT: usize = 21;

/// Floats per landmark in the JS buffer (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

/// Floats per hand in the JS buffer
pub const HAND_FLOATS: usize = LANDMARK_COUNT * LANDMARK_STRIDE;

/// Non-thumb fingertips counted by the classifier
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Joint a fingertip is compared against: two positions back along the finger (PIP)
pub const fn finger_base(tip: usize) -> usize {
    tip - 2
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand landmark (normalized to the camera frame, y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One frame's worth of landmarks for a single hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse the first hand out of a flat `[x0, y0, z0, x1, ...]` buffer.
    ///
    /// Extra trailing floats (a second hand) are ignored.
    pub fn from_flat(data: &[f32]) -> Result<Self, LandmarkError> {
        if data.len() < HAND_FLOATS {
            return Err(LandmarkError::BadLength {
                got: data.len(),
                expected: HAND_FLOATS,
            });
        }

        let mut points = [HandLandmark::default(); LANDMARK_COUNT];
        for (i, chunk) in data[..HAND_FLOATS].chunks_exact(LANDMARK_STRIDE).enumerate() {
            if chunk.iter().any(|v| !v.is_finite()) {
                return Err(LandmarkError::NonFinite { index: i });
            }
            points[i] = HandLandmark::new(chunk[0], chunk[1], chunk[2]);
        }

        Ok(Self { points })
    }

    pub fn get(&self, index: usize) -> Option<&HandLandmark> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[HandLandmark; LANDMARK_COUNT] {
        &self.points
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = HandLandmark;

    fn index(&self, index: usize) -> &HandLandmark {
        &self.points[index]
    }
}
