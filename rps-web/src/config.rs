//! Runtime-tunable game parameters

use crate::error::ConfigError;

/// How far (normalized frame units) a fingertip must clear its PIP joint to count as up
pub const DEFAULT_FINGER_MARGIN: f32 = 0.02;

/// Upper bound for the margin; beyond this no real hand can raise a finger
pub const MAX_FINGER_MARGIN: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub finger_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            finger_margin: DEFAULT_FINGER_MARGIN,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = self.finger_margin;
        if !m.is_finite() || !(0.0..=MAX_FINGER_MARGIN).contains(&m) {
            return Err(ConfigError::FingerMarginOutOfRange {
                value: m,
                max: MAX_FINGER_MARGIN,
            });
        }
        Ok(())
    }

    /// Copy with a new margin, rejected if out of range
    pub fn with_finger_margin(self, finger_margin: f32) -> Result<Self, ConfigError> {
        let config = Self { finger_margin };
        config.validate()?;
        Ok(config)
    }
}
