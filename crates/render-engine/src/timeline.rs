//! Seconds-based JSON timeline for cloud compositors.
//!
//! Tracks are emitted top to bottom: text above video above background.
//! Every clip carries its own `start`/`length` in seconds; transitions are
//! per-clip `in`/`out` tags that the compositor blends against whatever
//! sits underneath, which is why the background track must outlast the
//! final clip's out-transition.

use serde::Serialize;

use reelcraft_plan_model::vocab::{
    Effect, Filter, OverlayPosition, SoundtrackEffect, TransitionPair,
};

use crate::layout::{TextSize, TimelineLayout};

/// Root document submitted to the compositor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTimeline {
    pub timeline: TimelineBody,
    pub output: OutputSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBody {
    /// Canvas color behind every track.
    pub background: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub soundtrack: Option<Soundtrack>,

    /// Ordered top (index 0) to bottom.
    pub tracks: Vec<Track>,
}

/// What a track holds; implied by order on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrackRole {
    Text,
    Video,
    Background,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    #[serde(skip)]
    pub role: TrackRole,
    pub clips: Vec<TrackClip>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackClip {
    pub asset: Asset,
    pub start: f64,
    pub length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Asset {
    Title {
        text: String,
        style: String,
        color: String,
        size: TextSize,
        position: OverlayPosition,
    },
    Video {
        src: String,
        trim: f64,
        volume: f64,
    },
    Html {
        html: String,
        width: u32,
        height: u32,
        background: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Soundtrack {
    pub src: String,
    pub effect: SoundtrackEffect,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub format: String,
    pub fps: u32,
    pub size: OutputSize,
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl RenderTimeline {
    pub fn track(&self, role: TrackRole) -> Option<&Track> {
        self.timeline.tracks.iter().find(|t| t.role == role)
    }

    /// Clips of the video track, in playback order.
    pub fn video_clips(&self) -> &[TrackClip] {
        self.track(TrackRole::Video)
            .map(|t| t.clips.as_slice())
            .unwrap_or(&[])
    }

    /// Clips of the text track, in display order.
    pub fn text_clips(&self) -> &[TrackClip] {
        self.track(TrackRole::Text)
            .map(|t| t.clips.as_slice())
            .unwrap_or(&[])
    }
}

/// Serializes a layout into the seconds-based track shape.
#[derive(Debug, Clone, Copy)]
pub struct TimelineBuilder {
    fps: u32,
}

impl TimelineBuilder {
    /// `fps` is only advertised in the output block; all positions stay in seconds.
    pub fn new(fps: u32) -> Self {
        Self { fps }
    }

    pub fn build(&self, layout: &TimelineLayout) -> RenderTimeline {
        let mut tracks = Vec::with_capacity(3);

        // Compositors reject empty tracks, so the text track only exists
        // when there is text.
        if !layout.overlays.is_empty() {
            tracks.push(Track {
                role: TrackRole::Text,
                clips: layout
                    .overlays
                    .iter()
                    .map(|overlay| TrackClip {
                        asset: Asset::Title {
                            text: overlay.text.clone(),
                            style: overlay.style.style.to_string(),
                            color: overlay.style.color.to_string(),
                            size: overlay.style.size,
                            position: overlay.position,
                        },
                        start: overlay.start,
                        length: overlay.duration,
                        transition: Some(TransitionPair::new(
                            overlay.style.fade_in,
                            overlay.style.fade_out,
                        )),
                        effect: None,
                        filter: None,
                    })
                    .collect(),
            });
        }

        tracks.push(Track {
            role: TrackRole::Video,
            clips: layout
                .clips
                .iter()
                .map(|clip| TrackClip {
                    asset: Asset::Video {
                        src: clip.source_reference.clone(),
                        trim: clip.trim_start,
                        volume: clip.volume,
                    },
                    start: clip.start,
                    length: clip.length,
                    transition: Some(clip.transition),
                    effect: clip.effect,
                    filter: clip.filter,
                })
                .collect(),
        });

        if let Some(background) = &layout.background {
            tracks.push(Track {
                role: TrackRole::Background,
                clips: vec![TrackClip {
                    asset: Asset::Html {
                        html: String::new(),
                        width: layout.platform_profile.width,
                        height: layout.platform_profile.height,
                        background: background.color.to_string(),
                    },
                    start: background.start,
                    length: background.length,
                    transition: None,
                    effect: None,
                    filter: None,
                }],
            });
        }

        let soundtrack = layout.soundtrack.as_ref().map(|music| Soundtrack {
            src: music.source_reference.clone(),
            effect: music.effect,
            volume: music.volume,
        });

        RenderTimeline {
            timeline: TimelineBody {
                background: layout.mode_profile.background_color.to_string(),
                soundtrack,
                tracks,
            },
            output: OutputSpec {
                format: "mp4".to_string(),
                fps: self.fps,
                size: OutputSize {
                    width: layout.platform_profile.width,
                    height: layout.platform_profile.height,
                },
                aspect_ratio: layout.platform_profile.aspect.to_string(),
            },
        }
    }
}
