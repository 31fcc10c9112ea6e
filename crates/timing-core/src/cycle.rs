//! Deterministic per-clip selection from a mode's pools.
//!
//! Selection depends only on the clip index and the pool, so the same plan
//! always receives the same effects and transitions.

use reelcraft_plan_model::plan::ClipSegment;
use reelcraft_plan_model::profile::ModeProfile;
use reelcraft_plan_model::vocab::{Effect, Filter, TransitionPair};

/// `pool[index mod pool.len()]`, or `None` for an empty pool.
pub fn pick<T: Copy>(pool: &[T], index: usize) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[index % pool.len()])
}

/// Pooled effect for clip `index`.
pub fn effect_for_clip(profile: &ModeProfile, index: usize) -> Option<Effect> {
    pick(profile.effect_pool, index)
}

/// Transition pair for clip `index`.
///
/// The opening clip always uses the mode's canonical pair; later clips
/// cycle through the transition pool.
pub fn transition_for_clip(profile: &ModeProfile, index: usize) -> TransitionPair {
    if index == 0 {
        return profile.transition;
    }
    pick(profile.transition_pool, index).unwrap_or(profile.transition)
}

/// Everything a clip receives from its mode, after per-clip overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipStyling {
    pub transition: TransitionPair,
    pub effect: Option<Effect>,
    pub filter: Option<Filter>,
}

/// Resolve styling for the clip at `index`. Explicit overrides on the
/// segment win over pooled and mode values, except that the opening clip
/// always keeps the mode's canonical transition.
pub fn style_clip(profile: &ModeProfile, index: usize, clip: &ClipSegment) -> ClipStyling {
    let transition = match clip.transition {
        Some(pair) if index > 0 => pair,
        _ => transition_for_clip(profile, index),
    };
    ClipStyling {
        transition,
        effect: clip.effect.or_else(|| effect_for_clip(profile, index)),
        filter: clip.filter.or(profile.filter),
    }
}
