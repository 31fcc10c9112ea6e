use proptest::prelude::*;

use reelcraft_plan_model::plan::{ClipSegment, EditPlan, TextOverlay};
use reelcraft_plan_model::profile::{Mode, Platform};
use reelcraft_plan_model::vocab::{Transition, TransitionPair};
use reelcraft_render_engine::layout::CompileWarning;
use reelcraft_render_engine::{Backend, Compiler};

const MODE_KEYS: [&str; 8] = [
    "cinematic",
    "energetic",
    "documentary",
    "vlog",
    "minimal",
    "Hype",
    "vaporwave",
    "",
];

const PLATFORM_KEYS: [&str; 7] = [
    "youtube_shorts",
    "tiktok",
    "instagram_reels",
    "instagram_feed",
    "youtube",
    "Instagram-Reels",
    "myspace",
];

/// Lengths of at least 3s satisfy the minimum of every mode. Some clips,
/// including the first, carry transition overrides.
fn arb_plan() -> impl Strategy<Value = EditPlan> {
    (
        prop::sample::select(MODE_KEYS.to_vec()),
        prop::sample::select(PLATFORM_KEYS.to_vec()),
        prop::collection::vec(
            (
                3.0f64..12.0,
                0.0f64..5.0,
                prop::option::of(prop::sample::select(Transition::ALL.to_vec())),
            ),
            1..8,
        ),
        prop::collection::vec((0.0f64..60.0, 0.1f64..8.0), 0..5),
    )
        .prop_map(|(mode, platform, clips, overlays)| {
            let mut plan = EditPlan::new(mode, platform);
            for (i, (length, trim, transition)) in clips.into_iter().enumerate() {
                let mut clip = ClipSegment::new(format!("clip-{i}.mp4"), length).trimmed(trim);
                if let Some(transition) = transition {
                    clip = clip.with_transition(TransitionPair::symmetric(transition));
                }
                plan = plan.with_clip(clip);
            }
            for (i, (start, duration)) in overlays.into_iter().enumerate() {
                plan = plan.with_overlay(TextOverlay::new(format!("caption {i}"), start, duration));
            }
            plan
        })
}

proptest! {
    #[test]
    fn identical_plans_compile_to_identical_bytes(plan in arb_plan()) {
        let compiler = Compiler::with_defaults();
        for backend in Backend::ALL {
            let first = compiler.compile_json(&plan, backend).unwrap();
            let second = compiler.compile_json(&plan.clone(), backend).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn backends_agree_on_placement(plan in arb_plan()) {
        let compiler = Compiler::with_defaults();
        let layout = compiler.layout(&plan).unwrap();
        let seconds = compiler.seconds_builder().build(&layout);
        let frames = compiler.frame_builder().build(&layout);
        let fps = frames.fps as f64;

        let clips = seconds.video_clips();
        prop_assert_eq!(clips.len(), frames.sequences.len());
        for (clip, sequence) in clips.iter().zip(&frames.sequences) {
            prop_assert_eq!((clip.start * fps).round() as u64, sequence.from);
            prop_assert_eq!(
                ((clip.start + clip.length) * fps).round() as u64,
                sequence.from + sequence.duration_in_frames
            );
            prop_assert_eq!(clip.effect, sequence.ken_burns.map(|k| k.effect));
        }

        let texts = seconds.text_clips();
        prop_assert_eq!(texts.len(), frames.overlays.len());
        for (text, overlay) in texts.iter().zip(&frames.overlays) {
            prop_assert_eq!((text.start * fps).round() as u64, overlay.from);
            prop_assert!(text.start + text.length <= layout.video_duration + 1e-9);
            prop_assert!(overlay.from + overlay.duration_in_frames <= frames.duration_in_frames);
        }
    }

    #[test]
    fn unknown_keys_fall_back_without_failing(plan in arb_plan()) {
        let layout = Compiler::with_defaults().layout(&plan).unwrap();

        let mode_unknown = Mode::lookup(&plan.mode).is_none();
        let platform_unknown = Platform::lookup(&plan.platform).is_none();
        if mode_unknown {
            prop_assert_eq!(layout.mode, Mode::DEFAULT);
        }
        if platform_unknown {
            prop_assert_eq!(layout.platform, Platform::DEFAULT);
        }
        prop_assert_eq!(
            layout.warnings.iter().any(|w| matches!(w, CompileWarning::UnknownMode { .. })),
            mode_unknown
        );
        prop_assert_eq!(
            layout.warnings.iter().any(|w| matches!(w, CompileWarning::UnknownPlatform { .. })),
            platform_unknown
        );
    }

    #[test]
    fn appending_clips_never_restyles_the_first(plan in arb_plan(), extra in 1usize..4) {
        let compiler = Compiler::with_defaults();
        let before = compiler.layout(&plan).unwrap();

        let mut longer = plan.clone();
        for i in 0..extra {
            longer = longer.with_clip(ClipSegment::new(format!("extra-{i}.mp4"), 5.0));
        }
        let after = compiler.layout(&longer).unwrap();

        prop_assert_eq!(&before.clips[0], &after.clips[0]);
        prop_assert_eq!(before.clips[0].transition, before.mode_profile.transition);
        prop_assert!(after.video_duration > before.video_duration);
    }
}

#[test]
fn plan_violation_names_the_clip() {
    let plan = EditPlan::new("cinematic", "youtube")
        .with_clip(ClipSegment::new("a.mp4", 5.0))
        .with_clip(ClipSegment::new("b.mp4", 2.5));
    let err = Compiler::with_defaults().compile(&plan).unwrap_err();
    assert_eq!(err.clip_index(), Some(1));
    assert!(err.to_string().contains("clip 1"));
}

#[test]
fn empty_plan_is_rejected() {
    let plan = EditPlan::new("vlog", "tiktok");
    let err = Compiler::with_defaults().compile_frames(&plan).unwrap_err();
    assert!(err.is_invalid_plan());
    assert_eq!(err.clip_index(), None);
}
