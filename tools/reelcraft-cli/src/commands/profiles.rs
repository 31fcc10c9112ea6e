//! List mode and platform profiles.

use reelcraft_plan_model::profile::{Mode, Platform};

pub fn run() -> anyhow::Result<()> {
    println!("Modes:");
    for mode in Mode::ALL {
        let p = mode.profile();
        let default = if mode == Mode::DEFAULT { " (default)" } else { "" };
        println!("  {}{default}", mode.as_str());
        println!(
            "    transition: {} / {} over {:.2}s (min clip {:.2}s)",
            p.transition.transition_in.as_str(),
            p.transition.transition_out.as_str(),
            p.transition_duration,
            p.min_clip_length()
        );
        println!(
            "    effects: {}",
            p.effect_pool
                .iter()
                .map(|e| e.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "    filter: {}  background: {}",
            p.filter.map(|f| f.as_str()).unwrap_or("-"),
            p.background_color
        );
    }
    println!();

    println!("Platforms:");
    for platform in Platform::ALL {
        let p = platform.profile();
        let default = if platform == Platform::DEFAULT {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {}{default}: {}x{} {} max {:.0}s",
            platform.as_str(),
            p.width,
            p.height,
            p.aspect,
            p.max_duration_secs
        );
    }

    Ok(())
}
