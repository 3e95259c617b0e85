//! Display module - readout text and debug overlay
//!
//! Re-exports only. All logic in submodules.

mod metrics;
mod text;

pub use metrics::{get_debug_overlay_text, set_detection_latency, set_frame_metrics, tick_frame, FrameMetrics};
pub(crate) use metrics::with_metrics;
pub use text::{computer_text, result_color, result_text, sign_text, COMPUTER_PREFIX, NO_HAND_TEXT};
