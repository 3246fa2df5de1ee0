//! Run command - drives a scripted pointer session through the particle core

use crate::commands::settings;
use crate::mirror::DrawableMirror;
use crate::script::PointerScript;
use anyhow::{Context, Result};
use flurry_particles::{ParticleSystem, SimulationSettings, SystemType};
use flurry_runtime::{FrameClock, FrameReport, PointerInput};
use std::time::Instant;

pub struct RunArgs {
    pub config: Option<String>,
    pub system_type: Option<SystemType>,
    pub ticks: u64,
    pub seed: Option<u64>,
    pub intensity: Option<f64>,
    pub size: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub realtime: bool,
    pub format: String,
}

impl RunArgs {
    /// Command-line flags take precedence over the settings file
    fn apply_overrides(&self, settings: &mut SimulationSettings) {
        if let Some(system_type) = self.system_type {
            settings.system_type = system_type;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(intensity) = self.intensity {
            settings.intensity = intensity;
        }
        if let Some(size) = self.size {
            settings.size = size;
        }
        if let Some(width) = self.width {
            settings.viewport.width = width;
        }
        if let Some(height) = self.height {
            settings.viewport.height = height;
        }
    }
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut settings = settings::load(args.config.as_deref())?;
    args.apply_overrides(&mut settings);
    settings.validate().context("Invalid settings")?;

    let text = args.format == "text";
    if text {
        println!(
            "Running {} for {} tick(s) ({}ms interval, dt {}s)",
            settings.system_type, args.ticks, settings.clock.interval_ms, settings.clock.fixed_dt
        );
        println!("  {}", settings.system_type.description());
        println!();
    }

    let mut system = ParticleSystem::new(&settings, DrawableMirror::new());
    let mut clock = FrameClock::new(settings.clock);
    let mut input = PointerInput::new();
    let mut script = PointerScript::demo(settings.viewport, args.ticks);

    let started = Instant::now();
    while clock.total_ticks() < args.ticks {
        let tick = clock.total_ticks();
        for (_, event) in script.take_due(tick) {
            if let Some(request) = input.process(*event) {
                system.emit(request.position, request.burst);
            }
        }

        // One tick per pass so scripted events land on their own tick and the
        // run stops exactly at `--ticks`; owed ticks carry over to the next pass
        let report = if args.realtime {
            std::thread::sleep(clock.time_until_next_tick());
            clock.drive_at_most(&mut system, Instant::now(), 1)
        } else {
            clock.step(&mut system, Instant::now())
        };

        if text {
            print_status(&system, &clock, report);
        }
    }

    let stats = system.stats();
    let mirror = system.sink();
    if mirror.len() != stats.population || mirror.reported_population() != stats.population {
        log::warn!(
            "[run] renderer holds {} drawables for {} live particles",
            mirror.len(),
            stats.population
        );
    }

    if text {
        println!();
        println!("Finished in {:.2}s", started.elapsed().as_secs_f64());
        println!("  Ticks:      {}", stats.ticks);
        println!("  Population: {}", stats.population);
        println!("  Emitted:    {}", stats.emitted_total);
        println!("  Culled:     {}", stats.culled_total);
        println!(
            "  Signals:    {} added, {} updated, {} removed",
            mirror.added, mirror.updated, mirror.removed
        );
        if let Some(fps) = clock.fps().latest() {
            println!("  FPS:        {fps:.0}");
        }
    } else {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        println!("{json}");
    }

    Ok(())
}

fn print_status<S: flurry_particles::RenderSink>(
    system: &ParticleSystem<S>,
    clock: &FrameClock,
    report: FrameReport,
) {
    if let Some(fps) = report.fps {
        let stats = system.stats();
        println!(
            "[tick {:>5}] {}: population {:>5}, emitted {:>6}, culled {:>6}, fps {:.0}",
            clock.total_ticks(),
            system.system_type(),
            stats.population,
            stats.emitted_total,
            stats.culled_total,
            fps
        );
    }
}
