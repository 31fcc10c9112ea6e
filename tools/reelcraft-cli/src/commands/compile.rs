//! Compile a plan into renderer JSON.

use std::path::PathBuf;

use reelcraft_common::config::ReelcraftConfig;
use reelcraft_plan_model::LoadedPlan;
use reelcraft_render_engine::{Backend, Compiler};

pub fn run(
    config: &ReelcraftConfig,
    path: PathBuf,
    backend: Backend,
    mode: Option<String>,
    platform: Option<String>,
    fps: Option<u32>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let loaded =
        LoadedPlan::load(&path).map_err(|e| anyhow::anyhow!("Failed to load plan: {e}"))?;

    let mut compiler_config = config.compiler.clone();
    if let Some(fps) = fps {
        compiler_config = compiler_config.with_fps(fps);
    }
    let compiler = Compiler::new(compiler_config)?;

    let mode = mode.unwrap_or_else(|| loaded.plan.mode.clone());
    let platform = platform.unwrap_or_else(|| loaded.plan.platform.clone());
    let layout = compiler.layout_as(&loaded.plan, &mode, &platform)?;

    for warning in &layout.warnings {
        tracing::warn!(warning = ?warning, "Plan normalized during compile");
    }

    let json = compiler.render_json(&layout, backend)?;

    match output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&output_path, json)?;
            tracing::info!(
                output = %output_path.display(),
                backend = backend.as_str(),
                "Wrote render timeline"
            );
            eprintln!(
                "Compiled {} ({} clips, {:.2}s) -> {}",
                path.display(),
                layout.clips.len(),
                layout.video_duration,
                output_path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
