//! Runtime system trait

/// A system that can be ticked by the frame clock
///
/// `fixed_update` runs once per due tick with a constant step, so anything
/// implementing it stays deterministic regardless of the host's frame rate.
pub trait RuntimeSystem {
    /// Advance the simulation by one fixed step of `dt` seconds
    fn fixed_update(&mut self, dt: f64);

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
