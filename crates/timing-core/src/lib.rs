//! Reelcraft Timing Core
//!
//! The arithmetic every timeline backend shares:
//! - **Duration:** Clip start offsets and visible duration under transition overlap
//! - **Clamping:** Pull text overlays inside the visible duration
//! - **Cycling:** Deterministic per-clip effect and transition selection
//!
//! This crate is pure computation with no I/O and no shared state.
//! All inputs are data; all outputs are data.

pub mod clamp;
pub mod cycle;
pub mod duration;

pub use clamp::{ClampedSpan, OverlayClamper};
pub use duration::{DurationEstimate, DurationEstimator};
