//! Flurry Particles - water, smoke, and spark simulation
//!
//! Provides a CPU particle population driven by pointer input:
//! - Per-type emission and update profiles (`Water`, `Smoke`, `Sparks`)
//! - Semi-implicit Euler integration at a fixed step
//! - Culling on expiry or when a particle leaves the viewport margins
//! - Renderer-agnostic visual descriptors, signalled through a `RenderSink`

pub mod bounds;
pub mod curves;
pub mod particle;
pub mod profile;
pub mod rng;
pub mod settings;
pub mod signal;
pub mod system;
pub mod visual;

pub use bounds::{Bounds, CullRegion, Viewport};
pub use particle::Particle;
pub use profile::{Profile, SpawnRequest, SystemType};
pub use rng::ParticleRng;
pub use settings::SimulationSettings;
pub use signal::{EventBus, NullSink, ParticleEvent, RenderSink};
pub use system::{spawn_count, ParticleSystem, SystemStats, MAX_SPAWN_PER_EMIT};
pub use visual::{GradientStop, RadialGradient, ShapeKind, VisualDescriptor};
