//! Error types shared across Reelcraft crates.

use std::path::PathBuf;

/// Top-level error type for Reelcraft operations.
#[derive(Debug, thiserror::Error)]
pub enum ReelcraftError {
    /// The edit plan violates a structural invariant and cannot be compiled.
    #[error("Invalid plan{}: {message}", clip_suffix(.clip_index))]
    InvalidPlan {
        clip_index: Option<usize>,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ReelcraftError.
pub type ReelcraftResult<T> = Result<T, ReelcraftError>;

fn clip_suffix(clip_index: &Option<usize>) -> String {
    match clip_index {
        Some(index) => format!(" (clip {index})"),
        None => String::new(),
    }
}

impl ReelcraftError {
    /// Plan-level violation not tied to a single clip.
    pub fn invalid_plan(msg: impl Into<String>) -> Self {
        Self::InvalidPlan {
            clip_index: None,
            message: msg.into(),
        }
    }

    /// Violation attributed to the clip at `index`.
    pub fn invalid_clip(index: usize, msg: impl Into<String>) -> Self {
        Self::InvalidPlan {
            clip_index: Some(index),
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Index of the offending clip, when the error names one.
    pub fn clip_index(&self) -> Option<usize> {
        match self {
            Self::InvalidPlan { clip_index, .. } => *clip_index,
            _ => None,
        }
    }

    pub fn is_invalid_plan(&self) -> bool {
        matches!(self, Self::InvalidPlan { .. })
    }
}
