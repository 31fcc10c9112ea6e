//! Reelcraft Render Engine
//!
//! Compiles an edit plan into a renderer-ready timeline. All timing and
//! styling decisions are made once, in the layout; each backend is a thin
//! serializer over that layout.
//!
//! # Pipeline Architecture
//!
//! ```text
//! plan.json ──┐
//!             ├── Mode / Platform lookup (fallback + warning)
//! config ─────┘         │
//!                       ├── Duration estimate (transition overlap)
//!                       │         │
//!                       │         ├── Pool cycling (transition, effect, filter)
//!                       │         │
//!                       │         └── Overlay clamp
//!                       ▼
//!                TimelineLayout
//!                 │          │
//!                 ▼          ▼
//!        TimelineBuilder   FrameTimelineBuilder
//!          (seconds)          (frames)
//! ```

pub mod compiler;
pub mod frames;
pub mod layout;
pub mod timeline;

pub use compiler::{Backend, Compiler, TimelineSerializer};
pub use frames::{FrameProps, FrameTimelineBuilder};
pub use layout::{CompileWarning, LayoutSummary, TimelineLayout};
pub use timeline::{RenderTimeline, TimelineBuilder};
