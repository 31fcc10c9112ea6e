//! Timeline layout: the backend-neutral intermediate representation.
//!
//! Every decision about timing and styling is made here, once per compile.
//! The seconds backend and the frame backend only translate a finished
//! layout into their wire shapes, so they cannot disagree on where a clip
//! starts, which effect it carries, or where an overlay lands.

use serde::Serialize;

use reelcraft_common::config::CompilerConfig;
use reelcraft_common::error::ReelcraftResult;
use reelcraft_plan_model::plan::EditPlan;
use reelcraft_plan_model::profile::{Mode, ModeProfile, Platform, PlatformProfile};
use reelcraft_plan_model::vocab::{
    Effect, Filter, OverlayPosition, SoundtrackEffect, Transition, TransitionPair,
};
use reelcraft_timing::clamp::OverlayClamper;
use reelcraft_timing::cycle::style_clip;
use reelcraft_timing::duration::DurationEstimator;

/// A fully resolved timeline, independent of any renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub mode: Mode,
    pub platform: Platform,

    #[serde(skip)]
    pub mode_profile: &'static ModeProfile,
    #[serde(skip)]
    pub platform_profile: &'static PlatformProfile,

    /// Seconds of overlap between adjacent clips.
    pub transition_duration: f64,

    /// Visible duration after transition overlap.
    pub video_duration: f64,

    /// Sum of clip lengths.
    pub raw_duration: f64,

    pub clips: Vec<ClipPlacement>,
    pub overlays: Vec<OverlayPlacement>,
    pub background: Option<BackgroundSpan>,
    pub soundtrack: Option<SoundtrackPlacement>,

    /// Non-fatal findings. Never written into renderer payloads.
    pub warnings: Vec<CompileWarning>,
}

/// A clip positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipPlacement {
    pub index: usize,
    pub source_reference: String,
    pub trim_start: f64,
    pub start: f64,
    pub length: f64,
    pub transition: TransitionPair,
    pub effect: Option<Effect>,
    pub filter: Option<Filter>,
    pub volume: f64,
}

/// Relative title size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
    Small,
    Medium,
    Large,
    XLarge,
}

/// Visual treatment of one overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayStyle {
    pub style: &'static str,
    pub color: &'static str,
    pub size: TextSize,
    pub fade_in: Transition,
    pub fade_out: Transition,
}

/// A clamped text overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayPlacement {
    pub index: usize,
    pub text: String,
    pub start: f64,
    pub duration: f64,
    pub position: OverlayPosition,
    pub is_first: bool,
    pub is_last: bool,
    pub style: OverlayStyle,
}

/// Solid color beneath the video track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundSpan {
    pub color: &'static str,
    pub start: f64,
    pub length: f64,
}

/// Music bed for the whole video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundtrackPlacement {
    pub source_reference: String,
    pub effect: SoundtrackEffect,
    pub volume: f64,
}

/// Something the compiler normalized or fell back on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompileWarning {
    UnknownMode {
        requested: String,
        fallback: Mode,
    },
    UnknownPlatform {
        requested: String,
        fallback: Platform,
    },
    ExceedsPlatformDuration {
        video_duration: f64,
        max_duration: f64,
    },
    OverlayAdjusted {
        index: usize,
        requested_start: f64,
        requested_duration: f64,
        start: f64,
        duration: f64,
    },
}

/// Counts and durations for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutSummary {
    pub clip_count: usize,
    pub overlay_count: usize,
    pub raw_duration: f64,
    pub video_duration: f64,
    pub overlap_secs: f64,
    pub has_soundtrack: bool,
}

impl TimelineLayout {
    /// Resolve a plan using the mode and platform keys it carries.
    pub fn compute(plan: &EditPlan, config: &CompilerConfig) -> ReelcraftResult<Self> {
        Self::compute_as(plan, &plan.mode, &plan.platform, config)
    }

    /// Resolve a plan under explicit mode and platform keys.
    pub fn compute_as(
        plan: &EditPlan,
        mode_key: &str,
        platform_key: &str,
        config: &CompilerConfig,
    ) -> ReelcraftResult<Self> {
        config.validate()?;

        let mut warnings = Vec::new();

        let mode = Mode::lookup(mode_key).unwrap_or_else(|| {
            let fallback = Mode::resolve(mode_key);
            warnings.push(CompileWarning::UnknownMode {
                requested: mode_key.to_string(),
                fallback,
            });
            fallback
        });
        let platform = Platform::lookup(platform_key).unwrap_or_else(|| {
            let fallback = Platform::resolve(platform_key);
            warnings.push(CompileWarning::UnknownPlatform {
                requested: platform_key.to_string(),
                fallback,
            });
            fallback
        });

        let mode_profile = mode.profile();
        let platform_profile = platform.profile();

        let estimate = DurationEstimator::new(mode_profile.transition_duration)
            .estimate_clips(&plan.clips)?;
        let video_duration = estimate.video_duration;

        let clip_volume = if plan.has_music() {
            config.ducked_clip_volume
        } else {
            mode_profile.clip_volume
        };

        let clips = plan
            .clips
            .iter()
            .enumerate()
            .map(|(index, clip)| {
                let styling = style_clip(mode_profile, index, clip);
                ClipPlacement {
                    index,
                    source_reference: clip.source_reference.clone(),
                    trim_start: clip.trim_start,
                    start: estimate.starts[index],
                    length: clip.length,
                    transition: styling.transition,
                    effect: styling.effect,
                    filter: styling.filter,
                    volume: clip_volume,
                }
            })
            .collect();

        let clamper = OverlayClamper::from_config(config);
        let overlay_count = plan.overlays.len();
        let overlays = plan
            .overlays
            .iter()
            .enumerate()
            .map(|(index, overlay)| {
                let span = clamper.clamp(overlay.start, overlay.duration, video_duration);
                if span.adjusted {
                    tracing::debug!(
                        index,
                        requested_start = overlay.start,
                        requested_duration = overlay.duration,
                        start = span.start,
                        duration = span.duration,
                        "Clamped overlay into visible duration"
                    );
                    warnings.push(CompileWarning::OverlayAdjusted {
                        index,
                        requested_start: overlay.start,
                        requested_duration: overlay.duration,
                        start: span.start,
                        duration: span.duration,
                    });
                }

                let is_first = index == 0;
                let is_last = index + 1 == overlay_count;
                OverlayPlacement {
                    index,
                    text: overlay.text.clone(),
                    start: span.start,
                    duration: span.duration,
                    position: overlay.position,
                    is_first,
                    is_last,
                    style: overlay_style(mode_profile, overlay.position, is_first, is_last),
                }
            })
            .collect();

        if video_duration > platform_profile.max_duration_secs {
            tracing::warn!(
                platform = platform.as_str(),
                video_duration,
                max_duration = platform_profile.max_duration_secs,
                "Video exceeds platform duration limit"
            );
            warnings.push(CompileWarning::ExceedsPlatformDuration {
                video_duration,
                max_duration: platform_profile.max_duration_secs,
            });
        }

        let background = (video_duration > 0.0).then(|| BackgroundSpan {
            color: mode_profile.background_color,
            start: 0.0,
            length: video_duration + config.background_tail_secs,
        });

        let soundtrack = plan.music.as_ref().map(|music| {
            let volume = music.volume.unwrap_or_else(|| {
                if overlay_count > 0 {
                    mode_profile.music_volume * config.text_music_duck
                } else {
                    mode_profile.music_volume
                }
            });
            SoundtrackPlacement {
                source_reference: music.source_reference.clone(),
                effect: mode_profile.music_effect,
                volume: volume.clamp(0.0, 1.0),
            }
        });

        Ok(Self {
            mode,
            platform,
            mode_profile,
            platform_profile,
            transition_duration: mode_profile.transition_duration,
            video_duration,
            raw_duration: estimate.raw_duration,
            clips,
            overlays,
            background,
            soundtrack,
            warnings,
        })
    }

    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            clip_count: self.clips.len(),
            overlay_count: self.overlays.len(),
            raw_duration: self.raw_duration,
            video_duration: self.video_duration,
            overlap_secs: self.raw_duration - self.video_duration,
            has_soundtrack: self.soundtrack.is_some(),
        }
    }

    /// Transitions between adjacent clips: the incoming clip's entry.
    pub fn joins(&self) -> impl Iterator<Item = (usize, Transition)> + '_ {
        self.clips
            .windows(2)
            .map(|pair| (pair[0].index, pair[1].transition.transition_in))
    }
}

/// Title treatment from mode, placement, and position in the overlay list.
///
/// The opening caption is the largest and eases in slowly; the closing one
/// eases out slowly. Everything in between follows the mode's pace.
pub fn overlay_style(
    profile: &ModeProfile,
    position: OverlayPosition,
    is_first: bool,
    is_last: bool,
) -> OverlayStyle {
    let size = if is_first {
        TextSize::Large
    } else if is_last {
        TextSize::Medium
    } else {
        match position {
            OverlayPosition::Center => TextSize::Medium,
            OverlayPosition::Top | OverlayPosition::Bottom => TextSize::Small,
        }
    };

    let paced_fade = if profile.transition_duration < 0.5 {
        Transition::FadeFast
    } else {
        Transition::Fade
    };

    OverlayStyle {
        style: profile.title_style,
        color: profile.title_color,
        size,
        fade_in: if is_first {
            Transition::FadeSlow
        } else {
            paced_fade
        },
        fade_out: if is_last {
            Transition::FadeSlow
        } else {
            paced_fade
        },
    }
}
