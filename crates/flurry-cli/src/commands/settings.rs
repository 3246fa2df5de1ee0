//! Settings command - prints the effective settings

use anyhow::{Context, Result};
use flurry_particles::SimulationSettings;

/// Load settings from `config`, or the defaults when no file is given
pub fn load(config: Option<&str>) -> Result<SimulationSettings> {
    match config {
        Some(path) => SimulationSettings::load(path)
            .with_context(|| format!("Failed to load settings from {path}")),
        None => Ok(SimulationSettings::default()),
    }
}

pub fn run(config: Option<&str>) -> Result<()> {
    let settings = load(config)?;
    let text = settings
        .to_toml_string()
        .context("Failed to serialize settings")?;
    print!("{text}");
    Ok(())
}
