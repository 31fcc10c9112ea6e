//! Overlay clamping.
//!
//! Overlay timestamps are authored against the raw footage, not against
//! the visible duration left after transition overlap. Without clamping a
//! caption can start or run past the last visible frame and render over an
//! empty background.
//!
//! The clamp is total: any finite or non-finite input produces a span with
//! `start >= 0`, `duration >= min_duration`, and, whenever the video is at
//! least `min_duration` long, `start + duration <= video_duration`.

use serde::Serialize;

use reelcraft_common::config::{
    CompilerConfig, DEFAULT_MIN_OVERLAY_SECS, DEFAULT_OVERLAY_LOOKBACK_SECS,
};

/// A normalized overlay interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampedSpan {
    pub start: f64,
    pub duration: f64,

    /// Whether the span differs from what was requested.
    pub adjusted: bool,
}

impl ClampedSpan {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Pulls overlay spans inside the visible video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayClamper {
    /// Gap left before the end when a late overlay is moved back.
    lookback_secs: f64,

    /// Shortest exposure an overlay may have.
    min_duration_secs: f64,
}

impl Default for OverlayClamper {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_LOOKBACK_SECS, DEFAULT_MIN_OVERLAY_SECS)
    }
}

impl OverlayClamper {
    pub fn new(lookback_secs: f64, min_duration_secs: f64) -> Self {
        Self {
            lookback_secs: lookback_secs.max(0.0),
            min_duration_secs: min_duration_secs.max(0.0),
        }
    }

    pub fn from_config(config: &CompilerConfig) -> Self {
        Self::new(config.overlay_lookback_secs, config.min_overlay_secs)
    }

    pub fn lookback_secs(&self) -> f64 {
        self.lookback_secs
    }

    pub fn min_duration_secs(&self) -> f64 {
        self.min_duration_secs
    }

    /// Normalize `(start, duration)` against `video_duration`.
    ///
    /// 1. An overlay that starts at/after the end, or runs past it, is moved
    ///    back so it ends `lookback` seconds before the end.
    /// 2. Start is floored at zero.
    /// 3. Anything still running past the end is truncated.
    /// 4. Duration is floored at the minimum exposure.
    pub fn clamp(&self, start: f64, duration: f64, video_duration: f64) -> ClampedSpan {
        let video_duration = if video_duration.is_finite() {
            video_duration.max(0.0)
        } else {
            0.0
        };
        let requested_duration = if duration.is_nan() { 0.0 } else { duration.max(0.0) };

        let mut clamped_start = start;
        // Overruns shift too, not only late starts: (10, 3) in an 11s video
        // must land on (7.5, 3), not be truncated to (10, 1).
        if clamped_start >= video_duration || clamped_start + requested_duration > video_duration
        {
            clamped_start = video_duration - requested_duration - self.lookback_secs;
        }
        // NaN falls through to zero here.
        clamped_start = clamped_start.max(0.0);

        let mut clamped_duration = requested_duration;
        if clamped_start + clamped_duration > video_duration {
            clamped_duration = video_duration - clamped_start;
        }
        clamped_duration = clamped_duration.max(self.min_duration_secs);

        // The minimum exposure may push the end out again on very short
        // videos; slide back rather than overrun.
        if clamped_start + clamped_duration > video_duration {
            clamped_start = (video_duration - clamped_duration).max(0.0);
        }

        ClampedSpan {
            start: clamped_start,
            duration: clamped_duration,
            adjusted: clamped_start != start || clamped_duration != duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_inside_video_untouched() {
        let span = OverlayClamper::default().clamp(1.0, 2.0, 11.0);
        assert_eq!((span.start, span.duration), (1.0, 2.0));
        assert!(!span.adjusted);
    }

    #[test]
    fn test_overrunning_overlay_pulled_back() {
        let span = OverlayClamper::default().clamp(10.0, 3.0, 11.0);
        let (start, duration) = (span.start, span.duration);
        assert!((start - 7.5).abs() < 1e-12);
        assert!((duration - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_overrun_before_end_shifts_instead_of_truncating() {
        let span = OverlayClamper::default().clamp(9.0, 3.0, 11.0);
        assert!((span.start - 7.5).abs() < 1e-12);
        assert!((span.duration - 3.0).abs() < 1e-12);
        assert!(span.adjusted);
    }

    #[test]
    fn test_overlay_past_end_pulled_back() {
        let span = OverlayClamper::default().clamp(20.0, 2.0, 11.0);
        assert!((span.start - 8.5).abs() < 1e-12);
        assert!((span.duration - 2.0).abs() < 1e-12);
        assert!(span.adjusted);
    }

    #[test]
    fn test_overlay_longer_than_video_truncated() {
        let span = OverlayClamper::default().clamp(2.0, 30.0, 11.0);
        assert_eq!(span.start, 0.0);
        assert!((span.duration - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_start_floored() {
        let span = OverlayClamper::default().clamp(-3.0, 2.0, 11.0);
        assert_eq!(span.start, 0.0);
        assert!((span.duration - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_duration_raised_to_minimum() {
        let span = OverlayClamper::default().clamp(4.0, 0.1, 11.0);
        assert!((span.duration - 0.5).abs() < 1e-12);
        assert!(span.end() <= 11.0);
    }

    #[test]
    fn test_minimum_exposure_at_the_very_end() {
        let span = OverlayClamper::default().clamp(10.9, 0.0, 11.0);
        assert!(span.duration >= 0.5);
        assert!(span.end() <= 11.0 + 1e-12);
    }

    #[test]
    fn test_custom_lookback() {
        let span = OverlayClamper::new(1.25, 0.5).clamp(12.0, 2.0, 11.0);
        assert!((span.start - 7.75).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_inputs_are_total() {
        let clamper = OverlayClamper::default();
        for (start, duration) in [
            (f64::NAN, 2.0),
            (1.0, f64::NAN),
            (f64::INFINITY, 2.0),
            (1.0, f64::INFINITY),
            (f64::NEG_INFINITY, 1.0),
        ] {
            let span = clamper.clamp(start, duration, 11.0);
            assert!(span.start.is_finite() && span.duration.is_finite());
            assert!(span.start >= 0.0);
            assert!(span.duration >= 0.5);
            assert!(span.end() <= 11.0 + 1e-9, "{start} {duration} -> {span:?}");
        }
    }
}
