//! Startup failure reporting
//!
//! Camera and model loading happen in JS. When either fails the game cannot
//! run; JS reports it here and shows the returned message.

use wasm_bindgen::prelude::*;
use crate::error::StartupError;

/// Log the failure and return the message to display in place of the game
#[wasm_bindgen]
pub fn report_startup_failure(stage: &str, detail: &str) -> String {
    let err = StartupError::from_stage(stage, detail);
    web_sys::console::error_1(&JsValue::from(err.clone()));
    err.user_message()
}
