//! Reelcraft Plan Model
//!
//! Defines the data contracts the timeline compiler consumes:
//! - **Plan:** Ordered clip segments, text overlays, and optional music
//! - **Vocabulary:** Transition, effect, and filter identifiers understood by renderers
//! - **Profiles:** Per-mode pacing and per-platform framing tables
//!
//! All times are in seconds. Plans are produced upstream and never
//! mutated by the compiler.

pub mod plan;
pub mod profile;
pub mod vocab;

pub use plan::*;
pub use profile::*;
pub use vocab::*;
