//! Error types for the JS boundary

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Bad per-frame landmark buffer from JS
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("invalid landmark data length: {got} (expected at least {expected})")]
    BadLength { got: usize, expected: usize },
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Rejected configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("finger margin must be finite and within [0, {max}], got {value}")]
    FingerMarginOutOfRange { value: f32, max: f32 },
}

/// Startup dependency that failed. Both are terminal for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error("Camera unavailable: {0}")]
    Camera(String),
    #[error("Hand tracking model failed to load: {0}")]
    Model(String),
    #[error("Startup failed: {0}")]
    Other(String),
}

impl StartupError {
    /// Map the stage name JS reports ("camera", "model", ...) to a variant
    pub fn from_stage(stage: &str, detail: &str) -> Self {
        let detail = detail.trim().to_string();
        match stage.trim().to_ascii_lowercase().as_str() {
            "camera" | "video" | "getusermedia" => StartupError::Camera(detail),
            "model" | "landmarker" | "vision" => StartupError::Model(detail),
            _ => StartupError::Other(detail),
        }
    }

    /// Message shown in place of the game
    pub fn user_message(&self) -> String {
        match self {
            StartupError::Camera(_) => {
                "Camera access is needed to play. Allow the camera and reload the page.".to_string()
            }
            StartupError::Model(_) => {
                "Could not load hand tracking. Check your connection and reload the page.".to_string()
            }
            StartupError::Other(_) => "Something went wrong starting the game. Reload the page.".to_string(),
        }
    }
}

impl From<LandmarkError> for JsValue {
    fn from(err: LandmarkError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<StartupError> for JsValue {
    fn from(err: StartupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_stage_mapping() {
        assert_eq!(
            StartupError::from_stage("Camera", " NotAllowedError "),
            StartupError::Camera("NotAllowedError".into())
        );
        assert_eq!(
            StartupError::from_stage("model", "404"),
            StartupError::Model("404".into())
        );
        assert!(matches!(StartupError::from_stage("dom", "x"), StartupError::Other(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = LandmarkError::BadLength { got: 10, expected: 63 };
        assert_eq!(err.to_string(), "invalid landmark data length: 10 (expected at least 63)");
        assert_eq!(
            StartupError::Camera("denied".into()).to_string(),
            "Camera unavailable: denied"
        );
    }
}
