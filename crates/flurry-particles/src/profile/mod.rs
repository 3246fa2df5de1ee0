//! Per-type emission and update behavior
//!
//! Each [`SystemType`] is bound to a [`Profile`]: a pair of plain functions,
//! one that spawns a particle and one that evolves it every tick. The system
//! picks the pair once when the type is selected instead of branching on the
//! type inside the simulation loop.

pub mod smoke;
pub mod sparks;
pub mod water;

use crate::particle::Particle;
use crate::rng::ParticleRng;
use flurry_core::{FlurryError, ParticleId, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three particle phenomena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemType {
    #[default]
    Water,
    Smoke,
    Sparks,
}

impl SystemType {
    pub const ALL: [SystemType; 3] = [SystemType::Water, SystemType::Smoke, SystemType::Sparks];

    /// The emission/update pair bound to this type
    pub fn profile(self) -> Profile {
        match self {
            SystemType::Water => water::PROFILE,
            SystemType::Smoke => smoke::PROFILE,
            SystemType::Sparks => sparks::PROFILE,
        }
    }

    /// Smoke is expected to rise off the top of the screen, so the ceiling
    /// does not cull it.
    pub fn exempt_from_ceiling(self) -> bool {
        matches!(self, SystemType::Smoke)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SystemType::Water => "water",
            SystemType::Smoke => "smoke",
            SystemType::Sparks => "sparks",
        }
    }

    /// One-line description for status displays
    pub fn description(self) -> &'static str {
        match self {
            SystemType::Water => "flowing droplets affected by gravity",
            SystemType::Smoke => "rising, dissipating smoke clouds",
            SystemType::Sparks => "explosive, bright spark effects",
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemType {
    type Err = FlurryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "water" => Ok(SystemType::Water),
            "smoke" => Ok(SystemType::Smoke),
            "sparks" | "spark" => Ok(SystemType::Sparks),
            other => Err(FlurryError::InvalidSetting {
                field: "system_type".into(),
                reason: format!("unknown type '{other}'; valid values: water, smoke, sparks"),
            }),
        }
    }
}

/// Parameters of a single spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    /// Omnidirectional one-shot spawn instead of a directional stream
    pub burst: bool,
    /// Base particle scale
    pub size: f64,
}

/// Builds a fresh particle for a spawn request
pub type EmitFn = fn(ParticleId, &SpawnRequest, &mut ParticleRng) -> Particle;

/// Evolves a particle after integration, given its clamped life fraction
pub type UpdateFn = fn(&mut Particle, f64, &mut ParticleRng);

/// Emission/update strategy pair for one system type
#[derive(Clone, Copy)]
pub struct Profile {
    pub system_type: SystemType,
    pub emit: EmitFn,
    pub update: UpdateFn,
}

impl Profile {
    pub fn spawn(&self, id: ParticleId, request: &SpawnRequest, rng: &mut ParticleRng) -> Particle {
        (self.emit)(id, request, rng)
    }

    pub fn apply(&self, particle: &mut Particle, life_fraction: f64, rng: &mut ParticleRng) {
        (self.update)(particle, life_fraction, rng)
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("system_type", &self.system_type)
            .finish_non_exhaustive()
    }
}
