//! Transition-aware duration estimation.
//!
//! Adjacent clips share `transition_duration` seconds of blend material:
//! the tail of clip `i-1` plays underneath the head of clip `i`. Each clip
//! after the first therefore starts `transition_duration` before its
//! predecessor ends, and the visible duration is shorter than the raw sum
//! of lengths whenever there is more than one clip.
//!
//! ```text
//! clip 0 |==========|
//! clip 1         |==========|
//! clip 2                 |==========|
//!        0      3.5     7.0        11.0
//! ```

use serde::Serialize;

use reelcraft_common::error::{ReelcraftError, ReelcraftResult};
use reelcraft_plan_model::plan::ClipSegment;

/// Slack for comparing user-authored lengths against the minimum.
const LENGTH_EPSILON: f64 = 1e-9;

/// Visible clip offsets for a validated clip list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationEstimate {
    /// Timeline start of each clip (seconds), in playback order.
    pub starts: Vec<f64>,

    /// Length of each clip (seconds), echoed from the input.
    pub lengths: Vec<f64>,

    /// Last clip's start plus its length.
    pub video_duration: f64,

    /// Sum of clip lengths, ignoring overlap.
    pub raw_duration: f64,
}

impl DurationEstimate {
    pub fn clip_count(&self) -> usize {
        self.starts.len()
    }

    /// Seconds consumed by transition overlap.
    pub fn overlap_secs(&self) -> f64 {
        self.raw_duration - self.video_duration
    }
}

/// Computes clip start offsets for a fixed transition duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEstimator {
    transition_duration: f64,
}

impl DurationEstimator {
    pub fn new(transition_duration: f64) -> Self {
        Self {
            transition_duration: transition_duration.max(0.0),
        }
    }

    pub fn transition_duration(&self) -> f64 {
        self.transition_duration
    }

    /// Shortest clip that keeps one second clear of both transitions.
    pub fn min_clip_length(&self) -> f64 {
        2.0 * self.transition_duration + 1.0
    }

    /// Check the minimum-length invariant for every clip.
    pub fn validate(&self, lengths: &[f64]) -> ReelcraftResult<()> {
        if lengths.is_empty() {
            return Err(ReelcraftError::invalid_plan("plan has no clips"));
        }

        let min_length = self.min_clip_length();
        for (index, &length) in lengths.iter().enumerate() {
            if !length.is_finite() || length <= 0.0 {
                return Err(ReelcraftError::invalid_clip(
                    index,
                    format!("length must be a positive number of seconds (got {length})"),
                ));
            }
            if length + LENGTH_EPSILON < min_length {
                return Err(ReelcraftError::invalid_clip(
                    index,
                    format!(
                        "length {length:.2}s is below the minimum {min_length:.2}s \
                         (2 x transition {:.2}s + 1s of clear footage)",
                        self.transition_duration
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Validate clip segments, including trim offsets, then estimate.
    pub fn estimate_clips(&self, clips: &[ClipSegment]) -> ReelcraftResult<DurationEstimate> {
        for (index, clip) in clips.iter().enumerate() {
            if !clip.trim_start.is_finite() || clip.trim_start < 0.0 {
                return Err(ReelcraftError::invalid_clip(
                    index,
                    format!(
                        "trim start must be a non-negative number of seconds (got {})",
                        clip.trim_start
                    ),
                ));
            }
        }

        let lengths: Vec<f64> = clips.iter().map(|c| c.length).collect();
        self.estimate(&lengths)
    }

    /// Compute start offsets and visible duration.
    ///
    /// `start[0] = 0`, `start[i] = start[i-1] + length[i-1] - transition`.
    pub fn estimate(&self, lengths: &[f64]) -> ReelcraftResult<DurationEstimate> {
        self.validate(lengths)?;

        let mut starts = Vec::with_capacity(lengths.len());
        let mut cursor = 0.0;
        for (index, &length) in lengths.iter().enumerate() {
            if index > 0 {
                cursor -= self.transition_duration;
            }
            starts.push(cursor);
            cursor += length;
        }

        let video_duration = cursor;
        let raw_duration = lengths.iter().sum();

        tracing::debug!(
            clips = lengths.len(),
            video_duration,
            raw_duration,
            "Estimated visible duration"
        );

        Ok(DurationEstimate {
            starts,
            lengths: lengths.to_vec(),
            video_duration,
            raw_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_equal_clips() {
        let estimate = DurationEstimator::new(0.5)
            .estimate(&[4.0, 4.0, 4.0])
            .unwrap();
        assert_eq!(estimate.starts, vec![0.0, 3.5, 7.0]);
        assert!((estimate.video_duration - 11.0).abs() < 1e-12);
        assert!((estimate.raw_duration - 12.0).abs() < 1e-12);
        assert!((estimate.overlap_secs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_clip_duration_is_its_length() {
        let estimate = DurationEstimator::new(0.75).estimate(&[6.25]).unwrap();
        assert_eq!(estimate.starts, vec![0.0]);
        assert!((estimate.video_duration - 6.25).abs() < 1e-12);
        assert_eq!(estimate.overlap_secs(), 0.0);
    }

    #[test]
    fn test_uneven_lengths() {
        let estimate = DurationEstimator::new(0.3)
            .estimate(&[2.0, 5.0, 1.6])
            .unwrap();
        assert!((estimate.starts[1] - 1.7).abs() < 1e-9);
        assert!((estimate.starts[2] - 6.4).abs() < 1e-9);
        assert!((estimate.video_duration - 8.0).abs() < 1e-9);
        assert!((estimate.overlap_secs() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_clip_list_rejected() {
        let err = DurationEstimator::new(0.5).estimate(&[]).unwrap_err();
        assert!(err.is_invalid_plan());
        assert_eq!(err.clip_index(), None);
        assert!(err.to_string().contains("no clips"));
    }

    #[test]
    fn test_short_clip_rejected_with_index() {
        let err = DurationEstimator::new(0.5)
            .estimate(&[4.0, 4.0, 1.9, 4.0])
            .unwrap_err();
        assert_eq!(err.clip_index(), Some(2));
        assert!(err.to_string().contains("minimum 2.00s"), "{err}");
    }

    #[test]
    fn test_exact_minimum_accepted() {
        let estimator = DurationEstimator::new(0.3);
        assert!(estimator.estimate(&[1.6, 1.6]).is_ok());
    }

    #[test]
    fn test_non_finite_length_rejected() {
        let err = DurationEstimator::new(0.5)
            .estimate(&[4.0, f64::NAN])
            .unwrap_err();
        assert_eq!(err.clip_index(), Some(1));
    }

    #[test]
    fn test_negative_trim_rejected() {
        let clips = vec![
            ClipSegment::new("a", 4.0),
            ClipSegment::new("b", 4.0).trimmed(-1.0),
        ];
        let err = DurationEstimator::new(0.5)
            .estimate_clips(&clips)
            .unwrap_err();
        assert_eq!(err.clip_index(), Some(1));
        assert!(err.to_string().contains("trim start"));
    }
}
