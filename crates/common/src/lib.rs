//! Reelcraft Common Utilities
//!
//! Shared infrastructure for all Reelcraft crates:
//! - Error types and result aliases
//! - Frame/second conversion for the frame-indexed backend
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
