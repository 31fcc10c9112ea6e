//! Edit plan types.
//!
//! An edit plan is the upstream editorial decision: which footage to play,
//! in what order, with which captions and music. It is immutable input to
//! the compiler; field names follow the camelCase JSON produced upstream.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::vocab::{Effect, Filter, OverlayPosition, TransitionPair};

/// Top-level plan file (`plan.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPlan {
    /// Editorial mode key, resolved leniently at compile time.
    pub mode: String,

    /// Output platform key, resolved leniently at compile time.
    pub platform: String,

    /// Clips in playback order.
    pub clips: Vec<ClipSegment>,

    /// Text overlays in display order.
    #[serde(default)]
    pub overlays: Vec<TextOverlay>,

    /// Optional background music.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<MusicTrack>,
}

/// One span of source footage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipSegment {
    /// Opaque media locator. Never resolved by the compiler.
    pub source_reference: String,

    /// Offset into the source media where playback begins (seconds).
    #[serde(default)]
    pub trim_start: f64,

    /// Seconds of source footage used, including transition overlap.
    pub length: f64,

    /// Replaces the pooled effect for this clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,

    /// Replaces the mode filter for this clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,

    /// Replaces the pooled (or opening) transition pair for this clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionPair>,

    /// Scene-analysis hints carried along untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<serde_json::Value>,
}

/// A caption shown over the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOverlay {
    pub text: String,

    /// Requested start time (seconds). May lie past the visible end.
    pub start: f64,

    /// Requested display time (seconds).
    pub duration: f64,

    #[serde(default)]
    pub position: OverlayPosition,
}

/// Background music reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicTrack {
    /// Opaque media locator.
    pub source_reference: String,

    /// Explicit volume; the mode decides when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl EditPlan {
    /// Empty plan for the given mode and platform keys.
    pub fn new(mode: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            platform: platform.into(),
            clips: vec![],
            overlays: vec![],
            music: None,
        }
    }

    /// Append a clip (builder style).
    pub fn with_clip(mut self, clip: ClipSegment) -> Self {
        self.clips.push(clip);
        self
    }

    /// Append an overlay (builder style).
    pub fn with_overlay(mut self, overlay: TextOverlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Attach music (builder style).
    pub fn with_music(mut self, music: MusicTrack) -> Self {
        self.music = Some(music);
        self
    }

    /// Parse a plan from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sum of clip lengths, ignoring transition overlap.
    pub fn raw_duration(&self) -> f64 {
        self.clips.iter().map(|c| c.length).sum()
    }

    pub fn has_music(&self) -> bool {
        self.music.is_some()
    }
}

impl ClipSegment {
    /// Clip starting at the head of its source with no overrides.
    pub fn new(source_reference: impl Into<String>, length: f64) -> Self {
        Self {
            source_reference: source_reference.into(),
            trim_start: 0.0,
            length,
            effect: None,
            filter: None,
            transition: None,
            hints: None,
        }
    }

    pub fn trimmed(mut self, trim_start: f64) -> Self {
        self.trim_start = trim_start;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_transition(mut self, transition: TransitionPair) -> Self {
        self.transition = Some(transition);
        self
    }
}

impl TextOverlay {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
            position: OverlayPosition::default(),
        }
    }

    pub fn at(mut self, position: OverlayPosition) -> Self {
        self.position = position;
        self
    }
}

impl MusicTrack {
    pub fn new(source_reference: impl Into<String>) -> Self {
        Self {
            source_reference: source_reference.into(),
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// A plan together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedPlan {
    /// Filesystem path of the plan JSON.
    pub path: PathBuf,

    pub plan: EditPlan,
}

impl LoadedPlan {
    /// Load a plan from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref().to_path_buf();

        let json = std::fs::read_to_string(&path).map_err(|e| PlanError::IoError {
            path: path.clone(),
            source: e,
        })?;

        let plan: EditPlan = serde_json::from_str(&json).map_err(|e| PlanError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        if plan.clips.is_empty() {
            return Err(PlanError::ValidationError {
                message: format!("{} contains no clips", path.display()),
            });
        }

        Ok(Self { path, plan })
    }

    /// Write the plan back to its path as pretty JSON.
    pub fn save(&self) -> Result<(), PlanError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| PlanError::IoError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let json =
            serde_json::to_string_pretty(&self.plan).map_err(|e| PlanError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        std::fs::write(&self.path, json).map_err(|e| PlanError::IoError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

/// Errors that can occur when reading or writing plan files.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid plan file: {message}")]
    ValidationError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Transition;

    fn sample_plan() -> EditPlan {
        EditPlan::new("vlog", "tiktok")
            .with_clip(ClipSegment::new("s3://footage/a.mp4", 4.0).trimmed(1.5))
            .with_clip(
                ClipSegment::new("s3://footage/b.mp4", 5.0)
                    .with_transition(TransitionPair::symmetric(Transition::Zoom)),
            )
            .with_overlay(TextOverlay::new("Day one", 0.5, 2.0).at(OverlayPosition::Top))
            .with_music(MusicTrack::new("s3://music/track.mp3"))
    }

    #[test]
    fn test_plan_json_uses_camel_case() {
        let json = serde_json::to_string(&sample_plan()).unwrap();
        assert!(json.contains("\"sourceReference\""));
        assert!(json.contains("\"trimStart\":1.5"));
        assert!(json.contains("\"position\":\"top\""));
        assert!(!json.contains("\"effect\""), "absent overrides are omitted");
    }

    #[test]
    fn test_minimal_plan_fills_defaults() {
        let plan = EditPlan::from_json_str(
            r#"{"mode":"cinematic","platform":"youtube",
                "clips":[{"sourceReference":"a","length":4}]}"#,
        )
        .unwrap();
        assert_eq!(plan.clips[0].trim_start, 0.0);
        assert!(plan.overlays.is_empty());
        assert!(plan.music.is_none());
    }

    #[test]
    fn test_hints_are_carried_opaquely() {
        let plan = EditPlan::from_json_str(
            r#"{"mode":"vlog","platform":"tiktok",
                "clips":[{"sourceReference":"a","length":4,
                          "hints":{"sceneCuts":[1.2,3.4],"score":0.9}}]}"#,
        )
        .unwrap();
        let hints = plan.clips[0].hints.as_ref().unwrap();
        assert_eq!(hints["sceneCuts"][1], 3.4);
    }

    #[test]
    fn test_raw_duration() {
        assert!((sample_plan().raw_duration() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_loaded_plan_save_and_load() {
        let dir = std::env::temp_dir().join("reelcraft_test_plan");
        let _ = std::fs::remove_dir_all(&dir);

        let saved = LoadedPlan {
            path: dir.join("plan.json"),
            plan: sample_plan(),
        };
        saved.save().unwrap();

        let loaded = LoadedPlan::load(dir.join("plan.json")).unwrap();
        assert_eq!(loaded.plan, saved.plan);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_rejects_empty_plan_file() {
        let dir = std::env::temp_dir().join("reelcraft_test_empty_plan");
        let _ = std::fs::remove_dir_all(&dir);

        let empty = LoadedPlan {
            path: dir.join("plan.json"),
            plan: EditPlan::new("vlog", "tiktok"),
        };
        empty.save().unwrap();

        let err = LoadedPlan::load(dir.join("plan.json")).unwrap_err();
        assert!(matches!(err, PlanError::ValidationError { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = LoadedPlan::load("/definitely/not/here/plan.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/plan.json"));
    }
}
