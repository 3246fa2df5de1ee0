//! Water droplets: a forward stream pulled down by gravity, fading as they fall

use super::{Profile, SpawnRequest, SystemType};
use crate::particle::Particle;
use crate::rng::ParticleRng;
use crate::visual::{GradientStop, RadialGradient, ShapeKind, VisualDescriptor};
use flurry_core::{Color, ParticleId, Vec2};
use std::f64::consts::{FRAC_PI_2, TAU};

pub const PROFILE: Profile = Profile {
    system_type: SystemType::Water,
    emit: spawn,
    update: apply,
};

/// Downward pull, kept constant even when gusts nudge the horizontal term
pub const GRAVITY: f64 = 150.0;

const PALETTE: [Color; 4] = [
    Color::from_argb(200, 52, 152, 219),  // blue
    Color::from_argb(180, 46, 204, 113),  // cyan
    Color::from_argb(160, 26, 188, 156),  // turquoise
    Color::from_argb(220, 41, 128, 185),  // dark blue
];

/// Highlight offset that fakes a light reflection
const HIGHLIGHT: [f64; 2] = [0.3, 0.3];

pub fn spawn(id: ParticleId, request: &SpawnRequest, rng: &mut ParticleRng) -> Particle {
    let (angle, speed, lift) = if request.burst {
        (rng.range(0.0, TAU), rng.range(50.0, 150.0), 20.0)
    } else {
        (rng.centered(FRAC_PI_2), rng.range(20.0, 60.0), 5.0)
    };

    // Small upward kick on top of the launch direction
    let velocity = Vec2::from_angle(angle) * speed - Vec2::new(0.0, lift);
    let acceleration = Vec2::new(0.0, GRAVITY);
    let max_life = rng.range(2.0, 5.0);

    let width = request.size * rng.range(0.8, 1.2);
    let height = width * rng.range(1.2, 1.8);
    let color = rng.pick(&PALETTE);
    let fill = RadialGradient::new(
        HIGHLIGHT,
        vec![
            GradientStop::new(0.0, Color::WHITE),
            GradientStop::new(0.7, color),
            GradientStop::new(1.0, color.with_alpha(100)),
        ],
    );

    Particle::new(
        id,
        request.position,
        velocity,
        acceleration,
        request.size,
        max_life,
        VisualDescriptor::new(ShapeKind::Ellipse, width, height, fill),
    )
}

pub fn apply(particle: &mut Particle, life_fraction: f64, rng: &mut ParticleRng) {
    particle.visual.opacity = life_fraction * 0.9;

    // Wind gusts
    if rng.chance(0.1) {
        particle.acceleration = Vec2::new(particle.acceleration.x + rng.centered(10.0), GRAVITY);
    }
}
