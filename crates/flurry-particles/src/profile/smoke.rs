//! Smoke plumes: buoyant puffs that drift, swell, and thin out

use super::{Profile, SpawnRequest, SystemType};
use crate::curves::{age_ratio, lerp};
use crate::particle::Particle;
use crate::rng::ParticleRng;
use crate::visual::{RadialGradient, ShapeKind, VisualDescriptor};
use flurry_core::{Color, ParticleId, Vec2};
use std::f64::consts::{PI, TAU};

pub const PROFILE: Profile = Profile {
    system_type: SystemType::Smoke,
    emit: spawn,
    update: apply,
};

/// Upward acceleration (negative y is up)
pub const BUOYANCY: f64 = -30.0;

/// Puffs grow from 1x to 3x their base size over their life
const GROWTH: f64 = 3.0;

const PALETTE: [Color; 4] = [
    Color::from_argb(80, 44, 62, 80),     // dark gray
    Color::from_argb(60, 127, 140, 141),  // medium gray
    Color::from_argb(40, 149, 165, 166),  // light gray
    Color::from_argb(70, 52, 73, 94),     // blue-gray
];

pub fn spawn(id: ParticleId, request: &SpawnRequest, rng: &mut ParticleRng) -> Particle {
    let (angle, speed) = if request.burst {
        (rng.range(0.0, TAU), rng.range(30.0, 90.0))
    } else {
        (rng.centered(PI * 0.3), rng.range(10.0, 35.0))
    };

    let launch = Vec2::from_angle(angle) * speed;
    // Always rises, whatever the launch angle
    let velocity = Vec2::new(launch.x, -launch.y.abs() - 20.0);
    let acceleration = Vec2::new(rng.centered(20.0), BUOYANCY);
    let max_life = rng.range(3.0, 7.0);

    let base = request.size * rng.range(1.5, 3.5);
    let height = base * rng.range(0.8, 1.2);
    let color = rng.pick(&PALETTE);

    Particle::new(
        id,
        request.position,
        velocity,
        acceleration,
        request.size,
        max_life,
        VisualDescriptor::new(
            ShapeKind::Ellipse,
            base,
            height,
            RadialGradient::fade(color, Color::TRANSPARENT),
        ),
    )
}

pub fn apply(particle: &mut Particle, life_fraction: f64, rng: &mut ParticleRng) {
    let width = particle.size * lerp(1.0, GROWTH, age_ratio(life_fraction));
    particle.visual.width = width;
    particle.visual.height = width * rng.range(0.8, 1.2);
    particle.visual.opacity = life_fraction * 0.6;

    // Turbulence
    if rng.chance(0.2) {
        particle.velocity.x += rng.centered(20.0);
    }
}
