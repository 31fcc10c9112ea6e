//! Frame clock: conversions between second-valued timeline positions and
//! frame indices.
//!
//! The seconds backend and the frame backend must agree on where every
//! clip and overlay lands. Both go through this type so the rounding rule
//! lives in exactly one place.

/// Absorbs floating residue such as `330.00000000000006` before `ceil`.
const FRAME_EPSILON: f64 = 1e-9;

/// A fixed-rate frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    fps: u32,
}

impl FrameClock {
    /// Create a clock at the given frame rate. `fps` must be non-zero;
    /// callers validate it through `CompilerConfig::validate`.
    pub fn new(fps: u32) -> Self {
        Self { fps: fps.max(1) }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Nearest frame index for a timeline position.
    pub fn secs_to_frame(&self, secs: f64) -> u64 {
        let frames = (secs.max(0.0) * self.fps as f64).round();
        frames as u64
    }

    /// Frames needed to cover `secs` completely.
    pub fn secs_to_frames_ceil(&self, secs: f64) -> u64 {
        let frames = secs.max(0.0) * self.fps as f64;
        (frames - FRAME_EPSILON).ceil().max(0.0) as u64
    }

    /// Frame count for the half-open span `[start, start + length)`.
    ///
    /// Rounds both edges instead of the length so adjacent spans that
    /// share an edge in seconds also share it in frames.
    pub fn span_frames(&self, start_secs: f64, length_secs: f64) -> u64 {
        let from = self.secs_to_frame(start_secs);
        let to = self.secs_to_frame(start_secs + length_secs);
        to.saturating_sub(from)
    }

    /// Timeline position of a frame index.
    pub fn frame_to_secs(&self, frame: u64) -> f64 {
        frame as f64 / self.fps as f64
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FPS)
    }
}
