//! Renderer vocabulary: the closed sets of transitions, motion effects,
//! color filters, and placements a plan may reference.
//!
//! Identifiers serialize in the camelCase form compositors expect
//! (`fadeSlow`, `zoomIn`, ...).

use serde::{Deserialize, Serialize};

/// Blend used when a clip enters or leaves the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    Fade,
    FadeSlow,
    FadeFast,
    Reveal,
    WipeLeft,
    WipeRight,
    SlideLeft,
    SlideRight,
    SlideUp,
    SlideDown,
    Zoom,
}

/// Programmatic pan/zoom applied over a clip (Ken-Burns style motion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Effect {
    ZoomIn,
    ZoomInSlow,
    ZoomOut,
    ZoomOutSlow,
    SlideLeft,
    SlideRight,
    SlideUp,
    SlideDown,
}

/// Whole-clip color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    Boost,
    Contrast,
    Darken,
    Greyscale,
    Lighten,
    Muted,
}

/// Vertical placement of a text overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPosition {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Fade envelope applied to the soundtrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundtrackEffect {
    FadeIn,
    FadeOut,
    FadeInFadeOut,
}

/// Entry and exit transition of a single clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionPair {
    #[serde(rename = "in")]
    pub transition_in: Transition,
    #[serde(rename = "out")]
    pub transition_out: Transition,
}

impl TransitionPair {
    pub const fn new(transition_in: Transition, transition_out: Transition) -> Self {
        Self {
            transition_in,
            transition_out,
        }
    }

    /// Same transition on both edges.
    pub const fn symmetric(transition: Transition) -> Self {
        Self::new(transition, transition)
    }
}

impl Transition {
    pub const ALL: [Transition; 11] = [
        Transition::Fade,
        Transition::FadeSlow,
        Transition::FadeFast,
        Transition::Reveal,
        Transition::WipeLeft,
        Transition::WipeRight,
        Transition::SlideLeft,
        Transition::SlideRight,
        Transition::SlideUp,
        Transition::SlideDown,
        Transition::Zoom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Fade => "fade",
            Transition::FadeSlow => "fadeSlow",
            Transition::FadeFast => "fadeFast",
            Transition::Reveal => "reveal",
            Transition::WipeLeft => "wipeLeft",
            Transition::WipeRight => "wipeRight",
            Transition::SlideLeft => "slideLeft",
            Transition::SlideRight => "slideRight",
            Transition::SlideUp => "slideUp",
            Transition::SlideDown => "slideDown",
            Transition::Zoom => "zoom",
        }
    }
}

impl Effect {
    pub const ALL: [Effect; 8] = [
        Effect::ZoomIn,
        Effect::ZoomInSlow,
        Effect::ZoomOut,
        Effect::ZoomOutSlow,
        Effect::SlideLeft,
        Effect::SlideRight,
        Effect::SlideUp,
        Effect::SlideDown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Effect::ZoomIn => "zoomIn",
            Effect::ZoomInSlow => "zoomInSlow",
            Effect::ZoomOut => "zoomOut",
            Effect::ZoomOutSlow => "zoomOutSlow",
            Effect::SlideLeft => "slideLeft",
            Effect::SlideRight => "slideRight",
            Effect::SlideUp => "slideUp",
            Effect::SlideDown => "slideDown",
        }
    }
}

impl Filter {
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::Boost => "boost",
            Filter::Contrast => "contrast",
            Filter::Darken => "darken",
            Filter::Greyscale => "greyscale",
            Filter::Lighten => "lighten",
            Filter::Muted => "muted",
        }
    }
}

impl OverlayPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayPosition::Top => "top",
            OverlayPosition::Center => "center",
            OverlayPosition::Bottom => "bottom",
        }
    }
}

impl SoundtrackEffect {
    pub fn fades_in(self) -> bool {
        matches!(self, SoundtrackEffect::FadeIn | SoundtrackEffect::FadeInFadeOut)
    }

    pub fn fades_out(self) -> bool {
        matches!(self, SoundtrackEffect::FadeOut | SoundtrackEffect::FadeInFadeOut)
    }
}
