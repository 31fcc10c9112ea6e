//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ReelcraftError, ReelcraftResult};

/// Default output frame rate for the frame-indexed backend.
pub const DEFAULT_FPS: u32 = 30;

/// Lookback applied when an overlay is pulled back inside the visible
/// duration. Kept as an overridable value; see `CompilerConfig`.
pub const DEFAULT_OVERLAY_LOOKBACK_SECS: f64 = 0.5;

/// Shortest exposure any text overlay may end up with after clamping.
pub const DEFAULT_MIN_OVERLAY_SECS: f64 = 0.5;

/// How far the background track extends past the last visible frame.
pub const DEFAULT_BACKGROUND_TAIL_SECS: f64 = 1.0;

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReelcraftConfig {
    /// Timeline compiler settings.
    pub compiler: CompilerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Tunables for the plan-to-timeline compiler.
///
/// None of these change the structure of the output, only the numbers
/// written into it. Two compilers with equal configs always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Frame rate used by the frame-indexed backend.
    pub fps: u32,

    /// Margin subtracted when an overlay is moved back inside the video.
    pub overlay_lookback_secs: f64,

    /// Minimum overlay duration after clamping.
    pub min_overlay_secs: f64,

    /// Extra background coverage past the end of the video.
    pub background_tail_secs: f64,

    /// Clip audio volume when a soundtrack is present.
    pub ducked_clip_volume: f64,

    /// Multiplier applied to the mode's music volume when text overlays exist.
    pub text_music_duck: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "reelcraft=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            overlay_lookback_secs: DEFAULT_OVERLAY_LOOKBACK_SECS,
            min_overlay_secs: DEFAULT_MIN_OVERLAY_SECS,
            background_tail_secs: DEFAULT_BACKGROUND_TAIL_SECS,
            ducked_clip_volume: 0.2,
            text_music_duck: 0.8,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl CompilerConfig {
    /// Reject settings that would make the compiled timeline meaningless.
    pub fn validate(&self) -> ReelcraftResult<()> {
        if self.fps == 0 {
            return Err(ReelcraftError::config("fps must be > 0"));
        }

        let margins = [
            ("overlay_lookback_secs", self.overlay_lookback_secs),
            ("min_overlay_secs", self.min_overlay_secs),
            ("background_tail_secs", self.background_tail_secs),
        ];
        for (name, value) in margins {
            if !value.is_finite() || value < 0.0 {
                return Err(ReelcraftError::config(format!(
                    "{name} must be a finite, non-negative number of seconds (got {value})"
                )));
            }
        }

        let volumes = [
            ("ducked_clip_volume", self.ducked_clip_volume),
            ("text_music_duck", self.text_music_duck),
        ];
        for (name, value) in volumes {
            if !(0.0..=1.0).contains(&value) {
                return Err(ReelcraftError::config(format!(
                    "{name} must be within [0.0, 1.0] (got {value})"
                )));
            }
        }

        Ok(())
    }

    /// Same config with a different frame rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }
}

impl ReelcraftConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> ReelcraftResult<Self> {
        if !path.exists() {
            return Err(ReelcraftError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.compiler.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("reelcraft").join("config.json")
}
