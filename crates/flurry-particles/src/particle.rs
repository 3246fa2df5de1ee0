//! Particle simulation state

use crate::visual::VisualDescriptor;
use flurry_core::{ParticleId, Vec2};

/// One simulated particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Base linear scale the profiles derive rendered extents from
    pub size: f64,
    /// Seconds left; the particle is terminal once this reaches zero
    pub life: f64,
    pub max_life: f64,
    pub visual: VisualDescriptor,
}

impl Particle {
    /// A fresh particle with full life.
    ///
    /// `max_life` must be positive; a profile that violates this is a bug.
    pub fn new(
        id: ParticleId,
        position: Vec2,
        velocity: Vec2,
        acceleration: Vec2,
        size: f64,
        max_life: f64,
        visual: VisualDescriptor,
    ) -> Self {
        debug_assert!(max_life > 0.0, "particle max_life must be positive, got {max_life}");
        Self {
            id,
            position,
            velocity,
            acceleration,
            size: size.max(0.0),
            life: max_life,
            max_life,
            visual,
        }
    }

    /// Normalized remaining life in [0, 1]
    pub fn life_fraction(&self) -> f64 {
        if self.max_life <= 0.0 {
            0.0
        } else {
            (self.life / self.max_life).clamp(0.0, 1.0)
        }
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    /// Semi-implicit Euler step: velocity first, then position with the new velocity.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity = self.velocity.add_scaled(self.acceleration, dt);
        self.position = self.position.add_scaled(self.velocity, dt);
        self.life -= dt;
    }
}
