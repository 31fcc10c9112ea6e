//! Show the resolved layout of a plan.

use std::path::PathBuf;

use reelcraft_common::clock::FrameClock;
use reelcraft_common::config::ReelcraftConfig;
use reelcraft_plan_model::LoadedPlan;
use reelcraft_render_engine::Compiler;

pub fn run(config: &ReelcraftConfig, path: PathBuf) -> anyhow::Result<()> {
    let loaded =
        LoadedPlan::load(&path).map_err(|e| anyhow::anyhow!("Failed to load plan: {e}"))?;
    let compiler = Compiler::new(config.compiler.clone())?;
    let layout = compiler.layout(&loaded.plan)?;
    let summary = layout.summary();
    let clock = compiler.frame_builder().clock();

    println!("Plan: {}", loaded.path.display());
    println!("  Mode: {}", layout.mode.as_str());
    println!(
        "  Platform: {} ({}x{}, {}, {})",
        layout.platform.as_str(),
        layout.platform_profile.width,
        layout.platform_profile.height,
        layout.platform_profile.aspect,
        if layout.platform_profile.is_vertical() {
            "vertical"
        } else {
            "landscape"
        }
    );
    println!();

    println!("Duration:");
    println!("  Raw: {:.2}s", summary.raw_duration);
    println!(
        "  Visible: {:.2}s ({} frames @ {}fps)",
        summary.video_duration,
        clock.secs_to_frames_ceil(summary.video_duration),
        clock.fps()
    );
    println!("  Overlap: {:.2}s", summary.overlap_secs);
    println!();

    println!("Clips:");
    for clip in &layout.clips {
        println!(
            "  [{}] {} @ {:.2}s for {:.2}s  {}  in={} out={} effect={} filter={}",
            clip.index,
            clip.source_reference,
            clip.start,
            clip.length,
            frame_span(clock, clip.start, clip.length),
            clip.transition.transition_in.as_str(),
            clip.transition.transition_out.as_str(),
            clip.effect.map(|e| e.as_str()).unwrap_or("-"),
            clip.filter.map(|f| f.as_str()).unwrap_or("-"),
        );
    }

    if !layout.overlays.is_empty() {
        println!();
        println!("Overlays:");
        for overlay in &layout.overlays {
            println!(
                "  [{}] \"{}\" @ {:.2}s for {:.2}s  {}  ({:?})",
                overlay.index,
                overlay.text,
                overlay.start,
                overlay.duration,
                frame_span(clock, overlay.start, overlay.duration),
                overlay.style.size
            );
        }
    }

    if let Some(soundtrack) = &layout.soundtrack {
        println!();
        println!(
            "Soundtrack: {} (volume {:.2})",
            soundtrack.source_reference, soundtrack.volume
        );
    }

    if !layout.warnings.is_empty() {
        println!();
        println!("Warnings: {}", layout.warnings.len());
        for warning in &layout.warnings {
            println!("  {}", serde_json::to_string(warning)?);
        }
    }

    Ok(())
}

/// Frame range a span occupies, with its quantized start in seconds.
fn frame_span(clock: FrameClock, start: f64, length: f64) -> String {
    let from = clock.secs_to_frame(start);
    let frames = clock.span_frames(start, length);
    format!(
        "frames {}..{} (@{:.3}s)",
        from,
        from + frames,
        clock.frame_to_secs(from)
    )
}
