//! Show or write the effective configuration.

use std::path::PathBuf;

use reelcraft_common::config::{config_file_path, ReelcraftConfig};

/// `target` is the `--config` path when one was given.
pub fn run(config: &ReelcraftConfig, target: Option<PathBuf>, init: bool) -> anyhow::Result<()> {
    let path = target.unwrap_or_else(config_file_path);

    if init {
        config.save_to(&path)?;
        println!("Wrote config to: {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
