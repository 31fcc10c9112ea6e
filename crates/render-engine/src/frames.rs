//! Frame-indexed props for programmatic renderers.
//!
//! Same layout, different wire shape: positions become frame counts at a
//! fixed rate, effects become explicit Ken-Burns parameters, and
//! transitions become presentations placed between adjacent sequences
//! instead of per-clip tags.

use serde::Serialize;

use reelcraft_common::clock::FrameClock;
use reelcraft_plan_model::vocab::{Effect, Filter, OverlayPosition, Transition};

use crate::layout::{TextSize, TimelineLayout};

/// Fade applied to each edge of the soundtrack.
const SOUNDTRACK_FADE_SECS: f64 = 1.0;

/// Root props object handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProps {
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub duration_in_frames: u64,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<FrameSpan>,
    pub sequences: Vec<FrameSequence>,
    pub transitions: Vec<FrameTransition>,
    pub intro: FrameEdge,
    pub outro: FrameEdge,
    pub overlays: Vec<FrameOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<FrameMusic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSpan {
    pub from: u64,
    pub duration_in_frames: u64,
}

/// One clip, placed in frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSequence {
    pub index: usize,
    pub src: String,
    pub from: u64,
    pub duration_in_frames: u64,
    /// First source frame played.
    pub start_from: u64,
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ken_burns: Option<KenBurns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
}

/// Pan/zoom keyframes across a sequence. Offsets are percentages of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KenBurns {
    pub effect: Effect,
    pub from_scale: f64,
    pub to_scale: f64,
    pub from_x: f64,
    pub to_x: f64,
    pub from_y: f64,
    pub to_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationKind {
    Fade,
    Slide,
    Wipe,
    Iris,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    FromLeft,
    FromRight,
    FromTop,
    FromBottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub kind: PresentationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// Blend between sequence `after` and sequence `after + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTransition {
    pub after: usize,
    pub source: Transition,
    pub presentation: Presentation,
    pub duration_in_frames: u64,
}

/// Blend against the background at the very start or end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEdge {
    pub source: Transition,
    pub presentation: Presentation,
    pub duration_in_frames: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOverlay {
    pub index: usize,
    pub text: String,
    pub from: u64,
    pub duration_in_frames: u64,
    pub position: OverlayPosition,
    pub style: String,
    pub color: String,
    pub size: TextSize,
    pub fade_in_frames: u64,
    pub fade_out_frames: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMusic {
    pub src: String,
    pub volume: f64,
    pub fade_in_frames: u64,
    pub fade_out_frames: u64,
}

impl Presentation {
    /// Renderer presentation for a compositor transition name.
    pub fn for_transition(transition: Transition) -> Self {
        let (kind, direction) = match transition {
            Transition::Fade | Transition::FadeSlow | Transition::FadeFast => {
                (PresentationKind::Fade, None)
            }
            Transition::Reveal => (PresentationKind::Wipe, Some(Direction::FromLeft)),
            Transition::WipeLeft => (PresentationKind::Wipe, Some(Direction::FromRight)),
            Transition::WipeRight => (PresentationKind::Wipe, Some(Direction::FromLeft)),
            Transition::SlideLeft => (PresentationKind::Slide, Some(Direction::FromRight)),
            Transition::SlideRight => (PresentationKind::Slide, Some(Direction::FromLeft)),
            Transition::SlideUp => (PresentationKind::Slide, Some(Direction::FromBottom)),
            Transition::SlideDown => (PresentationKind::Slide, Some(Direction::FromTop)),
            Transition::Zoom => (PresentationKind::Iris, None),
        };
        Self { kind, direction }
    }
}

impl KenBurns {
    pub fn for_effect(effect: Effect) -> Self {
        let (from_scale, to_scale, to_x, to_y) = match effect {
            Effect::ZoomIn => (1.0, 1.15, 0.0, 0.0),
            Effect::ZoomInSlow => (1.0, 1.08, 0.0, 0.0),
            Effect::ZoomOut => (1.15, 1.0, 0.0, 0.0),
            Effect::ZoomOutSlow => (1.08, 1.0, 0.0, 0.0),
            Effect::SlideLeft => (1.1, 1.1, -4.0, 0.0),
            Effect::SlideRight => (1.1, 1.1, 4.0, 0.0),
            Effect::SlideUp => (1.1, 1.1, 0.0, -4.0),
            Effect::SlideDown => (1.1, 1.1, 0.0, 4.0),
        };
        Self {
            effect,
            from_scale,
            to_scale,
            from_x: 0.0,
            to_x,
            from_y: 0.0,
            to_y,
        }
    }
}

/// Nominal length of an overlay fade in seconds.
fn fade_secs(transition: Transition) -> f64 {
    match transition {
        Transition::FadeSlow => 1.0,
        Transition::FadeFast => 0.25,
        _ => 0.5,
    }
}

impl FrameProps {
    /// Start frame of every sequence, in playback order.
    pub fn sequence_starts(&self) -> Vec<u64> {
        self.sequences.iter().map(|s| s.from).collect()
    }
}

/// Serializes a layout into frame-indexed renderer props.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimelineBuilder {
    clock: FrameClock,
}

impl FrameTimelineBuilder {
    pub fn new(fps: u32) -> Self {
        Self {
            clock: FrameClock::new(fps),
        }
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn build(&self, layout: &TimelineLayout) -> FrameProps {
        let clock = self.clock;
        let transition_frames = clock.secs_to_frame(layout.transition_duration);

        let sequences = layout
            .clips
            .iter()
            .map(|clip| FrameSequence {
                index: clip.index,
                src: clip.source_reference.clone(),
                from: clock.secs_to_frame(clip.start),
                duration_in_frames: clock.span_frames(clip.start, clip.length),
                start_from: clock.secs_to_frame(clip.trim_start),
                volume: clip.volume,
                ken_burns: clip.effect.map(KenBurns::for_effect),
                filter: clip.filter,
            })
            .collect();

        let transitions = layout
            .joins()
            .map(|(after, transition)| FrameTransition {
                after,
                source: transition,
                presentation: Presentation::for_transition(transition),
                duration_in_frames: transition_frames,
            })
            .collect();

        // Layouts always hold at least one clip; the fallbacks only keep
        // this function total.
        let opening = layout
            .clips
            .first()
            .map(|c| c.transition.transition_in)
            .unwrap_or(layout.mode_profile.transition.transition_in);
        let closing = layout
            .clips
            .last()
            .map(|c| c.transition.transition_out)
            .unwrap_or(layout.mode_profile.transition.transition_out);
        let edge = |source: Transition| FrameEdge {
            source,
            presentation: Presentation::for_transition(source),
            duration_in_frames: transition_frames,
        };

        let overlays = layout
            .overlays
            .iter()
            .map(|overlay| {
                let duration_in_frames = clock.span_frames(overlay.start, overlay.duration).max(1);
                let half = duration_in_frames / 2;
                FrameOverlay {
                    index: overlay.index,
                    text: overlay.text.clone(),
                    from: clock.secs_to_frame(overlay.start),
                    duration_in_frames,
                    position: overlay.position,
                    style: overlay.style.style.to_string(),
                    color: overlay.style.color.to_string(),
                    size: overlay.style.size,
                    fade_in_frames: clock.secs_to_frame(fade_secs(overlay.style.fade_in)).min(half),
                    fade_out_frames: clock
                        .secs_to_frame(fade_secs(overlay.style.fade_out))
                        .min(half),
                }
            })
            .collect();

        let background = layout.background.as_ref().map(|bg| FrameSpan {
            from: clock.secs_to_frame(bg.start),
            duration_in_frames: clock.secs_to_frames_ceil(bg.length),
        });

        let fade_frames = clock.secs_to_frame(SOUNDTRACK_FADE_SECS);
        let music = layout.soundtrack.as_ref().map(|music| FrameMusic {
            src: music.source_reference.clone(),
            volume: music.volume,
            fade_in_frames: if music.effect.fades_in() { fade_frames } else { 0 },
            fade_out_frames: if music.effect.fades_out() {
                fade_frames
            } else {
                0
            },
        });

        FrameProps {
            fps: clock.fps(),
            width: layout.platform_profile.width,
            height: layout.platform_profile.height,
            duration_in_frames: clock.secs_to_frames_ceil(layout.video_duration),
            background_color: layout.mode_profile.background_color.to_string(),
            background,
            sequences,
            transitions,
            intro: edge(opening),
            outro: edge(closing),
            overlays,
            music,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcraft_common::config::CompilerConfig;
    use reelcraft_plan_model::plan::{ClipSegment, EditPlan, MusicTrack, TextOverlay};
    use reelcraft_plan_model::profile::Mode;

    fn build(plan: &EditPlan) -> FrameProps {
        let layout = TimelineLayout::compute(plan, &CompilerConfig::default()).unwrap();
        FrameTimelineBuilder::new(30).build(&layout)
    }

    fn plan() -> EditPlan {
        EditPlan::new("vlog", "instagram_reels")
            .with_clip(ClipSegment::new("a.mp4", 4.0))
            .with_clip(ClipSegment::new("b.mp4", 4.0).trimmed(1.0))
            .with_clip(ClipSegment::new("c.mp4", 4.0))
    }

    #[test]
    fn test_frames_for_three_clips() {
        let props = build(&plan());
        assert_eq!(props.fps, 30);
        assert_eq!(props.duration_in_frames, 330);
        assert_eq!(props.sequence_starts(), vec![0, 105, 210]);
        assert!(props.sequences.iter().all(|s| s.duration_in_frames == 120));
        assert_eq!(props.sequences[1].start_from, 30);
        assert_eq!((props.width, props.height), (1080, 1920));
    }

    #[test]
    fn test_transitions_sit_between_sequences() {
        let props = build(&plan());
        assert_eq!(props.transitions.len(), 2);
        assert_eq!(props.transitions[0].after, 0);
        assert_eq!(props.transitions[1].after, 1);
        assert!(props.transitions.iter().all(|t| t.duration_in_frames == 15));

        let profile = Mode::Vlog.profile();
        assert_eq!(props.intro.source, profile.transition.transition_in);
        assert_eq!(
            props.transitions[0].source,
            profile.transition_pool[1].transition_in
        );
    }

    #[test]
    fn test_effects_become_ken_burns() {
        let props = build(&plan());
        let effects: Vec<Effect> = props
            .sequences
            .iter()
            .filter_map(|s| s.ken_burns.map(|k| k.effect))
            .collect();
        assert_eq!(effects, vec![Effect::ZoomIn, Effect::ZoomOut, Effect::ZoomIn]);

        let zoom = props.sequences[0].ken_burns.unwrap();
        assert!(zoom.to_scale > zoom.from_scale);
    }

    #[test]
    fn test_presentation_mapping() {
        let slide = Presentation::for_transition(Transition::SlideLeft);
        assert_eq!(slide.kind, PresentationKind::Slide);
        assert_eq!(slide.direction, Some(Direction::FromRight));
        assert_eq!(
            Presentation::for_transition(Transition::FadeSlow).kind,
            PresentationKind::Fade
        );
        assert_eq!(
            Presentation::for_transition(Transition::Zoom).kind,
            PresentationKind::Iris
        );
    }

    #[test]
    fn test_overlay_frames_stay_inside_video() {
        let props = build(
            &plan()
                .with_overlay(TextOverlay::new("first", 0.0, 2.0))
                .with_overlay(TextOverlay::new("late", 10.0, 3.0)),
        );
        let late = &props.overlays[1];
        assert_eq!(late.from, 225);
        assert_eq!(late.duration_in_frames, 90);
        assert!(late.from + late.duration_in_frames <= props.duration_in_frames);
        assert_eq!(props.overlays[0].fade_in_frames, 30);
        assert_eq!(late.fade_out_frames, 30);
    }

    #[test]
    fn test_music_fades() {
        let props = build(&plan().with_music(MusicTrack::new("song.mp3")));
        let music = props.music.unwrap();
        assert_eq!(music.fade_in_frames, 30);
        assert_eq!(music.fade_out_frames, 30);
        assert!(props.sequences.iter().all(|s| s.volume < 0.5));
    }

    #[test]
    fn test_background_outlasts_video() {
        let props = build(&plan());
        let background = props.background.unwrap();
        assert_eq!(background.from, 0);
        assert_eq!(background.duration_in_frames, 360);
        assert!(background.duration_in_frames > props.duration_in_frames);
    }

    #[test]
    fn test_json_is_camel_case() {
        let json = serde_json::to_value(build(&plan())).unwrap();
        assert_eq!(json["durationInFrames"], 330);
        assert_eq!(json["sequences"][1]["startFrom"], 30);
        assert_eq!(json["intro"]["presentation"]["kind"], "fade");
        assert_eq!(json["transitions"][0]["presentation"]["kind"], "slide");
        assert_eq!(
            json["transitions"][0]["presentation"]["direction"],
            "from-right"
        );
        assert!(json.get("music").is_none());
    }
}
