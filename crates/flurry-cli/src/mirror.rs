//! Stand-in renderer: mirrors particle signals into a drawable table

use flurry_core::{ParticleId, Vec2};
use flurry_particles::{RenderSink, VisualDescriptor};
use std::collections::HashMap;

/// What a real renderer would hold per particle
#[derive(Debug, Clone)]
pub struct Drawable {
    pub top_left: Vec2,
    pub visual: VisualDescriptor,
}

/// Keeps one drawable per live particle and counts signal traffic
#[derive(Debug, Default)]
pub struct DrawableMirror {
    drawables: HashMap<ParticleId, Drawable>,
    population: usize,
    pub added: u64,
    pub updated: u64,
    pub removed: u64,
}

impl DrawableMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Last population figure the simulation reported
    pub fn reported_population(&self) -> usize {
        self.population
    }
}

impl RenderSink for DrawableMirror {
    fn particle_added(&mut self, id: ParticleId, visual: &VisualDescriptor) {
        self.added += 1;
        // Placed on its first update
        self.drawables.insert(
            id,
            Drawable {
                top_left: Vec2::ZERO,
                visual: visual.clone(),
            },
        );
    }

    fn particle_updated(&mut self, id: ParticleId, position: Vec2, visual: &VisualDescriptor) {
        self.updated += 1;
        if let Some(drawable) = self.drawables.get_mut(&id) {
            drawable.top_left = visual.top_left(position);
            drawable.visual.clone_from(visual);
        } else {
            log::warn!("[mirror] update for unknown particle {id}");
        }
    }

    fn particle_removed(&mut self, id: ParticleId) {
        self.removed += 1;
        if self.drawables.remove(&id).is_none() {
            log::warn!("[mirror] removal of unknown particle {id}");
        }
    }

    fn population_changed(&mut self, count: usize) {
        self.population = count;
    }
}
