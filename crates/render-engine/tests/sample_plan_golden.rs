use std::path::PathBuf;

use reelcraft_plan_model::plan::LoadedPlan;
use reelcraft_plan_model::vocab::{Effect, Transition};
use reelcraft_render_engine::frames::{Direction, PresentationKind};
use reelcraft_render_engine::layout::CompileWarning;
use reelcraft_render_engine::timeline::TrackRole;
use reelcraft_render_engine::{Backend, Compiler};

fn load_fixture_plan() -> LoadedPlan {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-plan")
        .join("plan.json");

    LoadedPlan::load(path).expect("fixture plan should load")
}

#[test]
fn sample_plan_layout_is_stable() {
    let loaded = load_fixture_plan();
    let layout = Compiler::with_defaults()
        .layout(&loaded.plan)
        .expect("fixture plan should compile");

    let starts: Vec<f64> = layout.clips.iter().map(|c| c.start).collect();
    assert_eq!(starts, vec![0.0, 4.0, 7.0, 12.0]);
    assert_eq!(layout.video_duration, 15.5);
    assert_eq!(layout.raw_duration, 18.5);

    let transitions: Vec<Transition> = layout
        .clips
        .iter()
        .map(|c| c.transition.transition_in)
        .collect();
    assert_eq!(
        transitions,
        vec![
            Transition::FadeSlow,
            Transition::Reveal,
            Transition::FadeSlow,
            Transition::Fade
        ]
    );

    let effects: Vec<Option<Effect>> = layout.clips.iter().map(|c| c.effect).collect();
    assert_eq!(
        effects,
        vec![
            Some(Effect::ZoomInSlow),
            Some(Effect::ZoomOutSlow),
            Some(Effect::SlideUp),
            Some(Effect::SlideRight)
        ]
    );

    let closing = &layout.overlays[2];
    assert_eq!((closing.start, closing.duration), (12.0, 3.0));
    assert!(matches!(
        layout.warnings.as_slice(),
        [CompileWarning::OverlayAdjusted { index: 2, .. }]
    ));

    let soundtrack = layout.soundtrack.as_ref().expect("music present");
    assert!((soundtrack.volume - 0.64).abs() < 1e-9);
    assert!(layout.clips.iter().all(|c| c.volume == 0.2));
}

#[test]
fn sample_plan_seconds_timeline() {
    let loaded = load_fixture_plan();
    let timeline = Compiler::with_defaults()
        .compile(&loaded.plan)
        .expect("fixture plan should compile");

    let roles: Vec<TrackRole> = timeline.timeline.tracks.iter().map(|t| t.role).collect();
    assert_eq!(
        roles,
        vec![TrackRole::Text, TrackRole::Video, TrackRole::Background]
    );
    assert_eq!(timeline.text_clips().len(), 3);
    assert_eq!(timeline.video_clips().len(), 4);

    let background = timeline
        .track(TrackRole::Background)
        .expect("background track");
    assert_eq!(background.clips[0].length, 16.5);

    assert_eq!(timeline.output.size.width, 1080);
    assert_eq!(timeline.output.size.height, 1920);
    assert_eq!(timeline.output.aspect_ratio, "9:16");
    assert_eq!(timeline.timeline.background, "#000000");
}

#[test]
fn sample_plan_frame_props() {
    let loaded = load_fixture_plan();
    let props = Compiler::with_defaults()
        .compile_frames(&loaded.plan)
        .expect("fixture plan should compile");

    assert_eq!(props.duration_in_frames, 465);
    assert_eq!(props.sequence_starts(), vec![0, 120, 210, 360]);
    let durations: Vec<u64> = props
        .sequences
        .iter()
        .map(|s| s.duration_in_frames)
        .collect();
    assert_eq!(durations, vec![150, 120, 180, 105]);
    assert_eq!(props.sequences[1].start_from, 45);

    let joins: Vec<(usize, Transition)> = props
        .transitions
        .iter()
        .map(|t| (t.after, t.source))
        .collect();
    assert_eq!(
        joins,
        vec![
            (0, Transition::Reveal),
            (1, Transition::FadeSlow),
            (2, Transition::Fade)
        ]
    );
    assert!(props.transitions.iter().all(|t| t.duration_in_frames == 30));
    assert_eq!(props.transitions[0].presentation.kind, PresentationKind::Wipe);
    assert_eq!(
        props.transitions[0].presentation.direction,
        Some(Direction::FromLeft)
    );
    assert_eq!(props.intro.source, Transition::FadeSlow);
    assert_eq!(props.outro.source, Transition::Fade);

    let overlays: Vec<(u64, u64)> = props
        .overlays
        .iter()
        .map(|o| (o.from, o.duration_in_frames))
        .collect();
    assert_eq!(overlays, vec![(0, 90), (180, 75), (360, 90)]);
    assert_eq!(props.overlays[1].fade_in_frames, 15);

    assert_eq!(props.background.map(|b| b.duration_in_frames), Some(495));
    let music = props.music.as_ref().expect("music present");
    assert_eq!((music.fade_in_frames, music.fade_out_frames), (30, 30));
}

#[test]
fn sample_plan_json_is_byte_stable() {
    let loaded = load_fixture_plan();
    let compiler = Compiler::with_defaults();
    for backend in Backend::ALL {
        let first = compiler
            .compile_json(&loaded.plan, backend)
            .expect("fixture plan should compile");
        let second = compiler
            .compile_json(&loaded.plan, backend)
            .expect("fixture plan should compile");
        assert_eq!(first, second, "{backend} output drifted between runs");
        assert!(!first.contains("warnings"));
        assert!(!first.contains("hints"));
    }
}
