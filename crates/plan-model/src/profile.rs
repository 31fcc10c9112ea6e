//! Editorial mode and output platform profiles.
//!
//! Both are closed enums backed by static tables. Lookups by string key
//! never fail: an unrecognized key resolves to the documented default
//! (`Mode::DEFAULT`, `Platform::DEFAULT`) and is reported as a warning.

use serde::{Deserialize, Serialize};

use crate::vocab::{Effect, Filter, SoundtrackEffect, Transition, TransitionPair};

/// Editorial style selecting pacing, transitions, and effect defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Cinematic,
    Energetic,
    Documentary,
    Vlog,
    Minimal,
}

/// Output destination selecting frame size and duration bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    YoutubeShorts,
    Tiktok,
    InstagramReels,
    InstagramFeed,
    Youtube,
}

/// Per-mode pacing table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeProfile {
    /// Transition pair used by the opening clip.
    pub transition: TransitionPair,

    /// Seconds of blend material shared by adjacent clips.
    pub transition_duration: f64,

    /// Transition pairs cycled through by clips after the first.
    pub transition_pool: &'static [TransitionPair],

    /// Motion effects cycled through by every clip.
    pub effect_pool: &'static [Effect],

    /// Color treatment applied to every clip unless overridden.
    pub filter: Option<Filter>,

    /// Solid color shown beneath the video track (hex).
    pub background_color: &'static str,

    /// Clip audio volume when there is no soundtrack.
    pub clip_volume: f64,

    /// Soundtrack volume before overlay ducking.
    pub music_volume: f64,

    /// Soundtrack fade envelope.
    pub music_effect: SoundtrackEffect,

    /// Title style name passed to the compositor.
    pub title_style: &'static str,

    /// Title text color (hex).
    pub title_color: &'static str,
}

/// Per-platform framing table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformProfile {
    pub width: u32,
    pub height: u32,

    /// Longest video the platform accepts, in seconds.
    pub max_duration_secs: f64,

    /// Human-readable aspect label, e.g. `"9:16"`.
    pub aspect: &'static str,
}

impl ModeProfile {
    /// Shortest clip that still shows one second of non-transitioning footage.
    pub fn min_clip_length(&self) -> f64 {
        2.0 * self.transition_duration + 1.0
    }
}

impl PlatformProfile {
    pub fn is_vertical(&self) -> bool {
        self.height > self.width
    }
}

static CINEMATIC: ModeProfile = ModeProfile {
    transition: TransitionPair::symmetric(Transition::FadeSlow),
    transition_duration: 1.0,
    transition_pool: &[
        TransitionPair::symmetric(Transition::Fade),
        TransitionPair::new(Transition::Reveal, Transition::Fade),
        TransitionPair::symmetric(Transition::FadeSlow),
    ],
    effect_pool: &[
        Effect::ZoomInSlow,
        Effect::ZoomOutSlow,
        Effect::SlideLeft,
        Effect::SlideRight,
    ],
    filter: Some(Filter::Contrast),
    background_color: "#000000",
    clip_volume: 0.6,
    music_volume: 0.8,
    music_effect: SoundtrackEffect::FadeInFadeOut,
    title_style: "vogue",
    title_color: "#ffffff",
};

static ENERGETIC: ModeProfile = ModeProfile {
    transition: TransitionPair::symmetric(Transition::FadeFast),
    transition_duration: 0.3,
    transition_pool: &[
        TransitionPair::new(Transition::WipeLeft, Transition::WipeRight),
        TransitionPair::new(Transition::SlideLeft, Transition::SlideRight),
        TransitionPair::symmetric(Transition::Zoom),
        TransitionPair::new(Transition::SlideUp, Transition::SlideDown),
    ],
    effect_pool: &[
        Effect::ZoomIn,
        Effect::ZoomOut,
        Effect::SlideLeft,
        Effect::SlideUp,
        Effect::SlideRight,
    ],
    filter: Some(Filter::Boost),
    background_color: "#0a0a0a",
    clip_volume: 0.5,
    music_volume: 1.0,
    music_effect: SoundtrackEffect::FadeOut,
    title_style: "blockbuster",
    title_color: "#ffffff",
};

static DOCUMENTARY: ModeProfile = ModeProfile {
    transition: TransitionPair::symmetric(Transition::Fade),
    transition_duration: 0.75,
    transition_pool: &[
        TransitionPair::symmetric(Transition::Fade),
        TransitionPair::symmetric(Transition::FadeSlow),
    ],
    effect_pool: &[Effect::ZoomInSlow, Effect::ZoomOutSlow],
    filter: None,
    background_color: "#111111",
    clip_volume: 1.0,
    music_volume: 0.5,
    music_effect: SoundtrackEffect::FadeInFadeOut,
    title_style: "subtitle",
    title_color: "#f5f5f5",
};

static VLOG: ModeProfile = ModeProfile {
    transition: TransitionPair::symmetric(Transition::Fade),
    transition_duration: 0.5,
    transition_pool: &[
        TransitionPair::symmetric(Transition::FadeFast),
        TransitionPair::new(Transition::SlideLeft, Transition::SlideRight),
        TransitionPair::symmetric(Transition::Fade),
    ],
    effect_pool: &[Effect::ZoomIn, Effect::ZoomOut],
    filter: Some(Filter::Lighten),
    background_color: "#1a1a1a",
    clip_volume: 1.0,
    music_volume: 0.6,
    music_effect: SoundtrackEffect::FadeInFadeOut,
    title_style: "marker",
    title_color: "#ffffff",
};

static MINIMAL: ModeProfile = ModeProfile {
    transition: TransitionPair::symmetric(Transition::Fade),
    transition_duration: 0.5,
    transition_pool: &[TransitionPair::symmetric(Transition::Fade)],
    effect_pool: &[Effect::ZoomInSlow],
    filter: None,
    background_color: "#ffffff",
    clip_volume: 0.8,
    music_volume: 0.7,
    music_effect: SoundtrackEffect::FadeInFadeOut,
    title_style: "minimal",
    title_color: "#111111",
};

static YOUTUBE_SHORTS: PlatformProfile = PlatformProfile {
    width: 1080,
    height: 1920,
    max_duration_secs: 60.0,
    aspect: "9:16",
};

static TIKTOK: PlatformProfile = PlatformProfile {
    width: 1080,
    height: 1920,
    max_duration_secs: 180.0,
    aspect: "9:16",
};

static INSTAGRAM_REELS: PlatformProfile = PlatformProfile {
    width: 1080,
    height: 1920,
    max_duration_secs: 90.0,
    aspect: "9:16",
};

static INSTAGRAM_FEED: PlatformProfile = PlatformProfile {
    width: 1080,
    height: 1350,
    max_duration_secs: 60.0,
    aspect: "4:5",
};

static YOUTUBE: PlatformProfile = PlatformProfile {
    width: 1920,
    height: 1080,
    max_duration_secs: 3600.0,
    aspect: "16:9",
};

/// Lowercase a key and fold `-`/space separators into `_`.
fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl Mode {
    /// Profile used for unknown mode keys.
    pub const DEFAULT: Mode = Mode::Cinematic;

    pub const ALL: [Mode; 5] = [
        Mode::Cinematic,
        Mode::Energetic,
        Mode::Documentary,
        Mode::Vlog,
        Mode::Minimal,
    ];

    /// Strict lookup: `None` for anything not in the table.
    pub fn lookup(key: &str) -> Option<Mode> {
        match normalize_key(key).as_str() {
            "cinematic" => Some(Mode::Cinematic),
            "energetic" | "hype" => Some(Mode::Energetic),
            "documentary" | "doc" => Some(Mode::Documentary),
            "vlog" => Some(Mode::Vlog),
            "minimal" => Some(Mode::Minimal),
            _ => None,
        }
    }

    /// Lenient lookup that falls back to `Mode::DEFAULT`.
    pub fn resolve(key: &str) -> Mode {
        match Self::lookup(key) {
            Some(mode) => mode,
            None => {
                tracing::warn!(
                    requested = key,
                    fallback = Self::DEFAULT.as_str(),
                    "Unknown mode, using default profile"
                );
                Self::DEFAULT
            }
        }
    }

    pub fn profile(self) -> &'static ModeProfile {
        match self {
            Mode::Cinematic => &CINEMATIC,
            Mode::Energetic => &ENERGETIC,
            Mode::Documentary => &DOCUMENTARY,
            Mode::Vlog => &VLOG,
            Mode::Minimal => &MINIMAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Cinematic => "cinematic",
            Mode::Energetic => "energetic",
            Mode::Documentary => "documentary",
            Mode::Vlog => "vlog",
            Mode::Minimal => "minimal",
        }
    }
}

impl Platform {
    /// Profile used for unknown platform keys.
    pub const DEFAULT: Platform = Platform::Youtube;

    pub const ALL: [Platform; 5] = [
        Platform::YoutubeShorts,
        Platform::Tiktok,
        Platform::InstagramReels,
        Platform::InstagramFeed,
        Platform::Youtube,
    ];

    /// Strict lookup: `None` for anything not in the table.
    pub fn lookup(key: &str) -> Option<Platform> {
        match normalize_key(key).as_str() {
            "youtube_shorts" | "shorts" => Some(Platform::YoutubeShorts),
            "tiktok" | "tik_tok" => Some(Platform::Tiktok),
            "instagram_reels" | "reels" | "instagram" => Some(Platform::InstagramReels),
            "instagram_feed" | "feed" => Some(Platform::InstagramFeed),
            "youtube" | "yt" => Some(Platform::Youtube),
            _ => None,
        }
    }

    /// Lenient lookup that falls back to `Platform::DEFAULT`.
    pub fn resolve(key: &str) -> Platform {
        match Self::lookup(key) {
            Some(platform) => platform,
            None => {
                tracing::warn!(
                    requested = key,
                    fallback = Self::DEFAULT.as_str(),
                    "Unknown platform, using default profile"
                );
                Self::DEFAULT
            }
        }
    }

    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::YoutubeShorts => &YOUTUBE_SHORTS,
            Platform::Tiktok => &TIKTOK,
            Platform::InstagramReels => &INSTAGRAM_REELS,
            Platform::InstagramFeed => &INSTAGRAM_FEED,
            Platform::Youtube => &YOUTUBE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::YoutubeShorts => "youtube_shorts",
            Platform::Tiktok => "tiktok",
            Platform::InstagramReels => "instagram_reels",
            Platform::InstagramFeed => "instagram_feed",
            Platform::Youtube => "youtube",
        }
    }
}
