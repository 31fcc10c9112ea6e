//! Reelcraft CLI: compile edit plans into render timelines.
//!
//! Usage:
//!   reelcraft compile <PLAN>     Compile a plan to renderer JSON
//!   reelcraft validate <PLAN>    Check a plan without emitting output
//!   reelcraft info <PLAN>        Show the resolved layout of a plan
//!   reelcraft profiles           List mode and platform profiles
//!   reelcraft config [--init]    Show or write the effective config

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use reelcraft_common::config::ReelcraftConfig;
use reelcraft_render_engine::Backend;

mod commands;

#[derive(Parser)]
#[command(
    name = "reelcraft",
    about = "Compile edit plans into render timelines",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a plan into renderer JSON
    Compile {
        /// Path to the plan JSON
        plan: PathBuf,

        /// Output backend: seconds|frames
        #[arg(short, long, default_value = "seconds")]
        backend: Backend,

        /// Override the plan's mode
        #[arg(long)]
        mode: Option<String>,

        /// Override the plan's platform
        #[arg(long)]
        platform: Option<String>,

        /// Output frame rate
        #[arg(long)]
        fps: Option<u32>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a plan without emitting output
    Validate {
        /// Path to the plan JSON
        plan: PathBuf,
    },

    /// Show the resolved layout of a plan
    Info {
        /// Path to the plan JSON
        plan: PathBuf,
    },

    /// List mode and platform profiles
    Profiles,

    /// Show the effective configuration
    Config {
        /// Write it to the `--config` path, or the standard location
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `config --init` may target a file that does not exist yet
    let initializing = matches!(cli.command, Commands::Config { init: true });
    let config = match &cli.config {
        Some(path) if initializing && !path.exists() => ReelcraftConfig::default(),
        Some(path) => ReelcraftConfig::load_from(path)?,
        None => ReelcraftConfig::load(),
    };

    // Logging goes to stderr so compiled JSON on stdout stays clean
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    reelcraft_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Compile {
            plan,
            backend,
            mode,
            platform,
            fps,
            output,
        } => commands::compile::run(&config, plan, backend, mode, platform, fps, output),
        Commands::Validate { plan } => commands::validate::run(&config, plan),
        Commands::Info { plan } => commands::info::run(&config, plan),
        Commands::Profiles => commands::profiles::run(),
        Commands::Config { init } => commands::config::run(&config, cli.config, init),
    }
}
