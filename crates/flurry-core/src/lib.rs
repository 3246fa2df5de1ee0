//! Flurry Core - Foundational types for the Flurry particle engine
//!
//! This crate provides the types that all other Flurry crates depend on:
//! - `Vec2` - 2D vector math for particle kinematics
//! - `Color` - 8-bit ARGB colors used by particle palettes
//! - `ParticleId` - Stable per-system particle identifiers
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{FlurryError, Result};
pub use id::ParticleId;
pub use types::{Color, Vec2};
