//! Validate a plan without emitting output.

use std::path::PathBuf;

use reelcraft_common::config::ReelcraftConfig;
use reelcraft_plan_model::LoadedPlan;
use reelcraft_render_engine::{CompileWarning, Compiler};

pub fn run(config: &ReelcraftConfig, path: PathBuf) -> anyhow::Result<()> {
    println!("Validating plan at: {}", path.display());

    let loaded =
        LoadedPlan::load(&path).map_err(|e| anyhow::anyhow!("Failed to load plan: {e}"))?;
    let compiler = Compiler::new(config.compiler.clone())?;
    let layout = compiler.layout(&loaded.plan)?;

    println!("  Clips: {}", layout.clips.len());
    println!("  Overlays: {}", layout.overlays.len());
    println!("  Visible duration: {:.2}s", layout.video_duration);

    if layout.warnings.is_empty() {
        println!("\nPlan is valid.");
    } else {
        println!("\nNormalizations:");
        for warning in &layout.warnings {
            println!("  - {}", describe(warning));
        }
        println!(
            "\n{} adjustment(s) applied. Plan compiles.",
            layout.warnings.len()
        );
    }

    Ok(())
}

fn describe(warning: &CompileWarning) -> String {
    match warning {
        CompileWarning::UnknownMode {
            requested,
            fallback,
        } => format!(
            "unknown mode '{requested}', using {}",
            fallback.as_str()
        ),
        CompileWarning::UnknownPlatform {
            requested,
            fallback,
        } => format!(
            "unknown platform '{requested}', using {}",
            fallback.as_str()
        ),
        CompileWarning::ExceedsPlatformDuration {
            video_duration,
            max_duration,
        } => format!("video runs {video_duration:.2}s, platform limit is {max_duration:.0}s"),
        CompileWarning::OverlayAdjusted {
            index,
            requested_start,
            requested_duration,
            start,
            duration,
        } => format!(
            "overlay {index} moved from {requested_start:.2}s+{requested_duration:.2}s to {start:.2}s+{duration:.2}s"
        ),
    }
}
