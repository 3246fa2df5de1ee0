//! Sparks: fast, short-lived embers that slow down and cool from white to red

use super::{Profile, SpawnRequest, SystemType};
use crate::curves::lerp;
use crate::particle::Particle;
use crate::rng::ParticleRng;
use crate::visual::{RadialGradient, ShapeKind, VisualDescriptor};
use flurry_core::{Color, ParticleId, Vec2};
use std::f64::consts::{PI, TAU};

pub const PROFILE: Profile = Profile {
    system_type: SystemType::Sparks,
    emit: spawn,
    update: apply,
};

pub const GRAVITY: f64 = 80.0;

/// Per-tick velocity multiplier (air resistance)
pub const DRAG: f64 = 0.98;

/// Below this life fraction a spark switches to its cooling colors
pub const COOLING_THRESHOLD: f64 = 0.5;

const PALETTE: [Color; 5] = [
    Color::from_argb(255, 255, 255, 255), // white
    Color::from_argb(255, 255, 255, 0),   // yellow
    Color::from_argb(255, 255, 165, 0),   // orange
    Color::from_argb(255, 255, 69, 0),    // red-orange
    Color::from_argb(255, 255, 140, 0),   // dark orange
];

const COOLING: [Color; 3] = [
    Color::from_argb(255, 255, 69, 0), // red-orange
    Color::from_argb(255, 255, 0, 0),  // red
    Color::from_argb(255, 139, 0, 0),  // dark red
];

pub fn spawn(id: ParticleId, request: &SpawnRequest, rng: &mut ParticleRng) -> Particle {
    let (angle, speed) = if request.burst {
        (rng.range(0.0, TAU), rng.range(80.0, 230.0))
    } else {
        (rng.centered(PI), rng.range(40.0, 120.0))
    };

    let velocity = Vec2::from_angle(angle) * speed;
    let acceleration = Vec2::new(0.0, GRAVITY);
    let max_life = rng.range(0.5, 2.0);

    let size = request.size;
    let (shape, width, height) = if rng.chance(0.7) {
        (ShapeKind::Rectangle, size * 0.3, size * rng.range(2.0, 5.0))
    } else {
        (ShapeKind::Ellipse, size, size)
    };
    let color = rng.pick(&PALETTE);

    Particle::new(
        id,
        request.position,
        velocity,
        acceleration,
        size,
        max_life,
        VisualDescriptor::new(
            shape,
            width,
            height,
            RadialGradient::fade(color, color.with_alpha(0)),
        ),
    )
}

pub fn apply(particle: &mut Particle, life_fraction: f64, rng: &mut ParticleRng) {
    // Flicker
    particle.visual.opacity = life_fraction * lerp(0.7, 1.0, rng.next_f64());
    particle.velocity *= DRAG;

    // Re-picked every tick once cool; the switch never reverts
    if life_fraction < COOLING_THRESHOLD {
        particle.visual.fill = RadialGradient::fade(rng.pick(&COOLING), Color::TRANSPARENT);
    }
}
