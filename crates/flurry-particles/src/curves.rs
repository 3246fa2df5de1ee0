//! Value-over-lifetime interpolation

/// Linear interpolation between two values
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Progress through a particle's life: 0 at spawn, 1 at expiry
pub fn age_ratio(life_fraction: f64) -> f64 {
    1.0 - life_fraction
}
