//! Performance metrics for the debug overlay
//!
//! Tracks FPS, detection latency and hand visibility for on-page display.

use wasm_bindgen::prelude::*;
use std::cell::{Cell, RefCell};

/// Smoothing weight kept from the previous value
const EMA_KEEP: f32 = 0.9;

/// Frame times outside this window (ms) are ignored (tab backgrounded, first frame)
const FRAME_TIME_WINDOW: (f32, f32) = (1.0, 200.0);

fn ema(prev: f32, sample: f32) -> f32 {
    prev * EMA_KEEP + sample * (1.0 - EMA_KEEP)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMetrics {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub detection_latency_ms: f32,
    pub frames_with_hand: u64,
    pub frames_without_hand: u64,
}

impl FrameMetrics {
    /// Returns false when the sample was discarded
    pub fn record_frame(&mut self, fps: f32, frame_time_ms: f32) -> bool {
        let (lo, hi) = FRAME_TIME_WINDOW;
        if !(lo..=hi).contains(&frame_time_ms) {
            return false;
        }
        self.fps = ema(self.fps, fps);
        self.frame_time_ms = ema(self.frame_time_ms, frame_time_ms);
        true
    }

    /// Record the gap between two frames, deriving FPS from it
    pub fn record_interval(&mut self, interval_ms: f32) -> bool {
        if interval_ms <= 0.0 {
            return false;
        }
        self.record_frame(1000.0 / interval_ms, interval_ms)
    }

    pub fn record_latency(&mut self, ms: f32) {
        if ms.is_finite() && ms >= 0.0 {
            self.detection_latency_ms = ema(self.detection_latency_ms, ms);
        }
    }

    pub fn record_detection(&mut self, hand_present: bool) {
        if hand_present {
            self.frames_with_hand += 1;
        } else {
            self.frames_without_hand += 1;
        }
    }

    /// Share of frames that had a hand (0-100)
    pub fn hand_visible_percent(&self) -> f32 {
        let total = self.frames_with_hand + self.frames_without_hand;
        if total == 0 {
            return 0.0;
        }
        self.frames_with_hand as f32 * 100.0 / total as f32
    }

    pub fn overlay_text(&self, rounds_played: u32) -> String {
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n\
             Hand tracking: {:.0}ms\n\
             Hand visible: {:.0}% | Rounds: {}",
            self.fps,
            self.frame_time_ms,
            self.detection_latency_ms,
            self.hand_visible_percent(),
            rounds_played,
        )
    }
}

thread_local! {
    static METRICS: RefCell<FrameMetrics> = RefCell::new(FrameMetrics::default());
    static LAST_FRAME_AT: Cell<Option<f64>> = Cell::new(None);
}

pub(crate) fn with_metrics<T>(f: impl FnOnce(&mut FrameMetrics) -> T) -> T {
    METRICS.with(|m| f(&mut m.borrow_mut()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    with_metrics(|m| m.record_frame(fps, frame_time_ms));
}

/// Timestamp the current frame and derive timing from the previous one
#[wasm_bindgen]
pub fn tick_frame() {
    let now = js_sys::Date::now();
    let prev = LAST_FRAME_AT.with(|t| t.replace(Some(now)));
    if let Some(prev) = prev {
        with_metrics(|m| m.record_interval((now - prev) as f32));
    }
}

/// Set hand landmarker latency for the last frame
#[wasm_bindgen]
pub fn set_detection_latency(ms: f32) {
    with_metrics(|m| m.record_latency(ms));
}

/// Get formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    let rounds = crate::bridge::get_rounds_played();
    with_metrics(|m| m.overlay_text(rounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_window_frames_are_ignored() {
        let mut m = FrameMetrics::default();
        assert!(!m.record_frame(60.0, 0.5));
        assert!(!m.record_frame(2.0, 500.0));
        assert_eq!(m.fps, 0.0);
        assert!(m.record_frame(60.0, 16.0));
        assert!((m.fps - 6.0).abs() < 1e-4);
        assert!((m.frame_time_ms - 1.6).abs() < 1e-4);
    }

    #[test]
    fn test_interval_derives_fps() {
        let mut m = FrameMetrics::default();
        assert!(!m.record_interval(0.0));
        assert!(m.record_interval(20.0));
        // first EMA step from zero: 10% of 50 fps
        assert!((m.fps - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_latency_ignored() {
        let mut m = FrameMetrics::default();
        m.record_latency(-3.0);
        m.record_latency(f32::INFINITY);
        assert_eq!(m.detection_latency_ms, 0.0);
        m.record_latency(20.0);
        assert!((m.detection_latency_ms - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_hand_visible_percent() {
        let mut m = FrameMetrics::default();
        assert_eq!(m.hand_visible_percent(), 0.0);
        m.record_detection(true);
        m.record_detection(true);
        m.record_detection(true);
        m.record_detection(false);
        assert!((m.hand_visible_percent() - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_overlay_text() {
        let m = FrameMetrics::default();
        let text = m.overlay_text(4);
        assert!(text.starts_with("FPS: 0 | Frame: 0.0ms"));
        assert!(text.ends_with("Rounds: 4"));
    }
}
