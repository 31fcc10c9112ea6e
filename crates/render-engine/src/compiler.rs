//! Compiler facade: plan in, renderer payload out.

use serde::Serialize;

use reelcraft_common::config::CompilerConfig;
use reelcraft_common::error::{ReelcraftError, ReelcraftResult};
use reelcraft_plan_model::plan::EditPlan;

use crate::frames::{FrameProps, FrameTimelineBuilder};
use crate::layout::TimelineLayout;
use crate::timeline::{RenderTimeline, TimelineBuilder};

/// Trait for output serializers (seconds-based JSON, frame-indexed props).
///
/// A serializer never re-derives timing; it only reshapes a finished layout.
pub trait TimelineSerializer {
    type Output: Serialize;

    /// Serializer name, for logs and CLI output.
    fn name(&self) -> &'static str;

    fn serialize(&self, layout: &TimelineLayout) -> Self::Output;
}

impl TimelineSerializer for TimelineBuilder {
    type Output = RenderTimeline;

    fn name(&self) -> &'static str {
        "seconds"
    }

    fn serialize(&self, layout: &TimelineLayout) -> RenderTimeline {
        self.build(layout)
    }
}

impl TimelineSerializer for FrameTimelineBuilder {
    type Output = FrameProps;

    fn name(&self) -> &'static str {
        "frames"
    }

    fn serialize(&self, layout: &TimelineLayout) -> FrameProps {
        self.build(layout)
    }
}

/// Output backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Track-based JSON with positions in seconds.
    #[default]
    Seconds,
    /// Frame-indexed props for programmatic renderers.
    Frames,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Seconds, Backend::Frames];

    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Seconds => "seconds",
            Backend::Frames => "frames",
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = ReelcraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seconds" | "json" => Ok(Backend::Seconds),
            "frames" | "props" => Ok(Backend::Frames),
            other => Err(ReelcraftError::config(format!(
                "unknown backend '{other}' (expected seconds or frames)"
            ))),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless plan compiler. Identical plans always compile to identical
/// output.
#[derive(Debug, Clone)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> ReelcraftResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: CompilerConfig::default(),
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Resolve the plan into a layout using its own mode and platform.
    pub fn layout(&self, plan: &EditPlan) -> ReelcraftResult<TimelineLayout> {
        self.layout_as(plan, &plan.mode, &plan.platform)
    }

    /// Resolve the plan under explicit mode and platform keys.
    pub fn layout_as(
        &self,
        plan: &EditPlan,
        mode: &str,
        platform: &str,
    ) -> ReelcraftResult<TimelineLayout> {
        let layout = TimelineLayout::compute_as(plan, mode, platform, &self.config)?;
        tracing::info!(
            mode = layout.mode.as_str(),
            platform = layout.platform.as_str(),
            clips = layout.clips.len(),
            overlays = layout.overlays.len(),
            video_duration = layout.video_duration,
            warnings = layout.warnings.len(),
            "Resolved timeline layout"
        );
        Ok(layout)
    }

    pub fn seconds_builder(&self) -> TimelineBuilder {
        TimelineBuilder::new(self.config.fps)
    }

    pub fn frame_builder(&self) -> FrameTimelineBuilder {
        FrameTimelineBuilder::new(self.config.fps)
    }

    /// Run any serializer over a freshly computed layout.
    pub fn compile_with<S: TimelineSerializer>(
        &self,
        plan: &EditPlan,
        serializer: &S,
    ) -> ReelcraftResult<S::Output> {
        let layout = self.layout(plan)?;
        tracing::debug!(serializer = serializer.name(), "Serializing layout");
        Ok(serializer.serialize(&layout))
    }

    /// Seconds-based render timeline.
    pub fn compile(&self, plan: &EditPlan) -> ReelcraftResult<RenderTimeline> {
        self.compile_with(plan, &self.seconds_builder())
    }

    pub fn compile_as(
        &self,
        plan: &EditPlan,
        mode: &str,
        platform: &str,
    ) -> ReelcraftResult<RenderTimeline> {
        let layout = self.layout_as(plan, mode, platform)?;
        Ok(self.seconds_builder().build(&layout))
    }

    /// Frame-indexed renderer props.
    pub fn compile_frames(&self, plan: &EditPlan) -> ReelcraftResult<FrameProps> {
        self.compile_with(plan, &self.frame_builder())
    }

    pub fn compile_frames_as(
        &self,
        plan: &EditPlan,
        mode: &str,
        platform: &str,
    ) -> ReelcraftResult<FrameProps> {
        let layout = self.layout_as(plan, mode, platform)?;
        Ok(self.frame_builder().build(&layout))
    }

    /// Both payloads from a single layout.
    pub fn compile_both(&self, plan: &EditPlan) -> ReelcraftResult<(RenderTimeline, FrameProps)> {
        let layout = self.layout(plan)?;
        Ok((
            self.seconds_builder().build(&layout),
            self.frame_builder().build(&layout),
        ))
    }

    /// Pretty-printed JSON for the chosen backend.
    pub fn compile_json(&self, plan: &EditPlan, backend: Backend) -> ReelcraftResult<String> {
        let layout = self.layout(plan)?;
        self.render_json(&layout, backend)
    }

    pub fn compile_frames_json(&self, plan: &EditPlan) -> ReelcraftResult<String> {
        self.compile_json(plan, Backend::Frames)
    }

    /// Pretty-printed JSON for an already resolved layout.
    pub fn render_json(
        &self,
        layout: &TimelineLayout,
        backend: Backend,
    ) -> ReelcraftResult<String> {
        let json = match backend {
            Backend::Seconds => serde_json::to_string_pretty(&self.seconds_builder().build(layout))?,
            Backend::Frames => serde_json::to_string_pretty(&self.frame_builder().build(layout))?,
        };
        Ok(json)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::with_defaults()
    }
}
