//! Flurry CLI - headless host for the Flurry particle engine

mod commands;
mod mirror;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, settings};
use flurry_particles::SystemType;

#[derive(Parser)]
#[command(name = "flurry")]
#[command(about = "Water, smoke, and spark particle simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted pointer session and report population and FPS
    Run {
        /// Path to a settings file (TOML)
        #[arg(long)]
        config: Option<String>,

        /// Particle type (water, smoke, sparks)
        #[arg(long = "type", value_parser = parse_system_type)]
        system_type: Option<SystemType>,

        /// Number of fixed ticks to simulate
        #[arg(long, default_value = "300")]
        ticks: u64,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Spawn-count multiplier
        #[arg(long)]
        intensity: Option<f64>,

        /// Base particle size
        #[arg(long)]
        size: Option<f64>,

        /// Viewport width in pixels
        #[arg(long)]
        width: Option<f64>,

        /// Viewport height in pixels
        #[arg(long)]
        height: Option<f64>,

        /// Pace ticks against the wall clock instead of running flat out
        #[arg(long)]
        realtime: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Print the effective settings as TOML
    Settings {
        /// Path to a settings file (TOML)
        #[arg(long)]
        config: Option<String>,
    },
}

fn parse_system_type(s: &str) -> Result<SystemType, String> {
    s.parse().map_err(|e: flurry_core::FlurryError| e.to_string())
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            system_type,
            ticks,
            seed,
            intensity,
            size,
            width,
            height,
            realtime,
            format,
        } => run::run(run::RunArgs {
            config,
            system_type,
            ticks,
            seed,
            intensity,
            size,
            width,
            height,
            realtime,
            format,
        }),
        Commands::Settings { config } => settings::run(config.as_deref()),
    }
}
