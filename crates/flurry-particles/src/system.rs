//! The particle population and its per-tick simulation

use crate::bounds::{Bounds, CullRegion, Viewport};
use crate::particle::Particle;
use crate::profile::{Profile, SpawnRequest, SystemType};
use crate::rng::ParticleRng;
use crate::settings::SimulationSettings;
use crate::signal::{EventBus, RenderSink};
use flurry_core::{ParticleId, Vec2};
use flurry_runtime::{ClockSettings, RuntimeSystem};
use serde::Serialize;

/// Counters for status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SystemStats {
    pub population: usize,
    pub emitted_total: u64,
    /// Particles removed by expiry or leaving the bounds
    pub culled_total: u64,
    /// Particles removed by `clear`
    pub cleared_total: u64,
    pub ticks: u64,
}

/// Upper bound on particles spawned by a single emission
pub const MAX_SPAWN_PER_EMIT: usize = 20_000;

/// Number of particles one emission spawns.
///
/// Non-positive, NaN, or infinite intensity spawns none; anything else is
/// capped at [`MAX_SPAWN_PER_EMIT`].
pub fn spawn_count(burst: bool, intensity: f64) -> usize {
    let raw = if burst { intensity * 2.0 } else { intensity / 3.0 };
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw.floor() as usize).min(MAX_SPAWN_PER_EMIT)
}

/// Owns the live particles, in spawn order, and everything that mutates them.
///
/// Signals go to the sink `S` as they happen. Pausing gates `emit` and
/// `tick`; `clear` always works.
pub struct ParticleSystem<S: RenderSink = EventBus> {
    particles: Vec<Particle>,
    profile: Profile,
    rng: ParticleRng,
    sink: S,
    paused: bool,
    intensity: f64,
    size: f64,
    viewport: Viewport,
    bounds: Bounds,
    clock: ClockSettings,
    seed: Option<u64>,
    next_id: ParticleId,
    stats: SystemStats,
}

impl ParticleSystem<EventBus> {
    /// A system that records its signals on an [`EventBus`]
    pub fn with_event_bus(settings: &SimulationSettings) -> Self {
        Self::new(settings, EventBus::new())
    }
}

impl<S: RenderSink> ParticleSystem<S> {
    /// Build a system from settings, seeding from `settings.seed` when present
    pub fn new(settings: &SimulationSettings, sink: S) -> Self {
        let rng = match settings.seed {
            Some(seed) => ParticleRng::new(seed),
            None => ParticleRng::from_entropy(),
        };
        Self::with_rng(settings, sink, rng)
    }

    pub fn with_rng(settings: &SimulationSettings, sink: S, rng: ParticleRng) -> Self {
        Self {
            particles: Vec::new(),
            profile: settings.system_type.profile(),
            rng,
            sink,
            paused: settings.paused,
            intensity: settings.intensity,
            size: settings.size,
            viewport: settings.viewport,
            bounds: settings.bounds,
            clock: settings.clock,
            seed: settings.seed,
            next_id: ParticleId(1),
            stats: SystemStats::default(),
        }
    }

    // --- Controls ---

    /// Switch the active type.
    ///
    /// Only future spawns use the new emission profile, but the new update
    /// profile takes over *every* live particle from the next tick on, whatever
    /// type spawned it. Existing shapes keep their kind.
    pub fn select_type(&mut self, system_type: SystemType) {
        if self.profile.system_type != system_type {
            log::info!("[particles] {system_type} selected: {}", system_type.description());
        }
        self.profile = system_type.profile();
    }

    pub fn system_type(&self) -> SystemType {
        self.profile.system_type
    }

    pub fn pause(&mut self) {
        if !self.paused {
            log::debug!("[particles] paused");
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            log::debug!("[particles] resumed");
        }
        self.paused = false;
    }

    /// Flip between running and paused, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_intensity(&mut self, intensity: f64) {
        self.intensity = intensity;
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // --- Simulation ---

    /// Emit using the current intensity and size controls
    pub fn emit(&mut self, position: Vec2, burst: bool) {
        self.emit_with(position, burst, self.size, self.intensity);
    }

    /// Spawn `spawn_count(burst, intensity)` particles of the active type at `position`
    pub fn emit_with(&mut self, position: Vec2, burst: bool, size: f64, intensity: f64) {
        if self.paused {
            return;
        }

        let count = spawn_count(burst, intensity);
        if count == 0 {
            return;
        }

        let request = SpawnRequest {
            position,
            burst,
            size: size.max(0.0),
        };

        self.particles.reserve(count);
        for _ in 0..count {
            let id = self.next_id;
            self.next_id = id.next();
            let particle = self.profile.spawn(id, &request, &mut self.rng);
            self.sink.particle_added(id, &particle.visual);
            self.particles.push(particle);
        }

        self.stats.emitted_total += count as u64;
        self.sink.population_changed(self.particles.len());
        log::trace!(
            "[particles] emitted {count} {} at ({:.1}, {:.1})",
            self.profile.system_type,
            position.x,
            position.y
        );
    }

    /// Advance every live particle by `dt` seconds, then cull.
    ///
    /// Per particle: integrate, age, run the *active* type's update profile,
    /// then remove it if it expired or left the cull region.
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }

        let before = self.particles.len();
        let profile = self.profile;
        let region = CullRegion::new(self.viewport, self.bounds, profile.system_type);
        let rng = &mut self.rng;
        let sink = &mut self.sink;

        self.particles.retain_mut(|p| {
            p.integrate(dt);
            let fraction = p.life_fraction();
            profile.apply(p, fraction, rng);

            if p.is_expired() || !region.contains(p.position) {
                sink.particle_removed(p.id);
                false
            } else {
                sink.particle_updated(p.id, p.position, &p.visual);
                true
            }
        });

        let after = self.particles.len();
        self.stats.ticks += 1;
        self.stats.culled_total += (before - after) as u64;
        if after != before {
            self.sink.population_changed(after);
        }
    }

    /// Remove every particle, signalling each removal. Works while paused.
    pub fn clear(&mut self) {
        if self.particles.is_empty() {
            return;
        }

        let removed = self.particles.len();
        for p in self.particles.drain(..) {
            self.sink.particle_removed(p.id);
        }
        self.stats.cleared_total += removed as u64;
        self.sink.population_changed(0);
        log::debug!("[particles] cleared {removed} particle(s)");
    }

    // --- Queries ---

    /// Live particles in spawn order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current controls as settings, e.g. for saving a session
    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            system_type: self.profile.system_type,
            intensity: self.intensity,
            size: self.size,
            paused: self.paused,
            seed: self.seed,
            viewport: self.viewport,
            bounds: self.bounds,
            clock: self.clock,
        }
    }

    pub fn stats(&self) -> SystemStats {
        SystemStats {
            population: self.particles.len(),
            ..self.stats
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Insert a hand-built particle, bypassing the emission profile
    #[cfg(test)]
    pub(crate) fn insert(&mut self, mut particle: Particle) -> ParticleId {
        let id = self.next_id;
        self.next_id = id.next();
        particle.id = id;
        self.particles.push(particle);
        id
    }
}

impl<S: RenderSink> RuntimeSystem for ParticleSystem<S> {
    fn fixed_update(&mut self, dt: f64) {
        self.tick(dt);
    }

    fn name(&self) -> &str {
        "particles"
    }
}
