//! Signals from the simulation to the rendering side

use crate::visual::VisualDescriptor;
use flurry_core::{ParticleId, Vec2};

/// Receives population changes as they happen.
///
/// Implemented by whatever owns the drawables: it maps particle ids to its
/// own shapes and mirrors the descriptors it is handed. All calls are
/// synchronous and must not block.
pub trait RenderSink {
    fn particle_added(&mut self, id: ParticleId, visual: &VisualDescriptor);

    /// Sent for every surviving particle on every tick; the descriptor may be unchanged
    fn particle_updated(&mut self, id: ParticleId, position: Vec2, visual: &VisualDescriptor);

    fn particle_removed(&mut self, id: ParticleId);

    /// Live particle count, sent only when it changed
    fn population_changed(&mut self, _count: usize) {}
}

/// A recorded signal
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleEvent {
    Added {
        id: ParticleId,
        visual: VisualDescriptor,
    },
    Updated {
        id: ParticleId,
        position: Vec2,
        visual: VisualDescriptor,
    },
    Removed {
        id: ParticleId,
    },
    Population(usize),
}

/// A simple event queue that the system pushes to and consumers drain
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<ParticleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: ParticleEvent) {
        self.events.push(event);
    }

    /// Drain all events from the bus, returning them
    pub fn drain(&mut self) -> Vec<ParticleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[ParticleEvent] {
        &self.events
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Ids of pending removal events
    pub fn removed_ids(&self) -> Vec<ParticleId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ParticleEvent::Removed { id } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for EventBus {
    fn particle_added(&mut self, id: ParticleId, visual: &VisualDescriptor) {
        self.push(ParticleEvent::Added {
            id,
            visual: visual.clone(),
        });
    }

    fn particle_updated(&mut self, id: ParticleId, position: Vec2, visual: &VisualDescriptor) {
        self.push(ParticleEvent::Updated {
            id,
            position,
            visual: visual.clone(),
        });
    }

    fn particle_removed(&mut self, id: ParticleId) {
        self.push(ParticleEvent::Removed { id });
    }

    fn population_changed(&mut self, count: usize) {
        self.push(ParticleEvent::Population(count));
    }
}

/// Discards every signal
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn particle_added(&mut self, _id: ParticleId, _visual: &VisualDescriptor) {}

    fn particle_updated(&mut self, _id: ParticleId, _position: Vec2, _visual: &VisualDescriptor) {}

    fn particle_removed(&mut self, _id: ParticleId) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::{RadialGradient, ShapeKind};
    use flurry_core::Color;

    fn visual() -> VisualDescriptor {
        VisualDescriptor::new(
            ShapeKind::Ellipse,
            1.0,
            1.0,
            RadialGradient::fade(Color::WHITE, Color::TRANSPARENT),
        )
    }

    #[test]
    fn test_push_and_drain() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        bus.particle_added(ParticleId(1), &visual());
        bus.particle_removed(ParticleId(1));
        bus.population_changed(0);

        assert_eq!(bus.len(), 3);
        assert_eq!(bus.removed_ids(), vec![ParticleId(1)]);

        let events = bus.drain();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], ParticleEvent::Population(0));
        assert!(bus.is_empty());
    }

    #[test]
    fn test_drain_clears() {
        let mut bus = EventBus::new();
        bus.particle_updated(ParticleId(2), Vec2::new(1.0, 2.0), &visual());

        let _ = bus.drain();
        assert!(bus.drain().is_empty());
    }
}
