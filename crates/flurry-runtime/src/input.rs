//! Pointer input translation

use flurry_core::Vec2;

/// Pointer events delivered by the host's windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at a position
    Pressed(Vec2),
    /// Pointer moved to a position
    Moved(Vec2),
    /// Primary button released
    Released,
    /// Secondary button pressed at a position
    SecondaryPressed(Vec2),
}

/// A request to emit particles, produced from pointer input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitRequest {
    pub position: Vec2,
    pub burst: bool,
}

/// Tracks pointer capture and turns pointer events into emission requests.
///
/// Holding the primary button streams particles while the pointer moves;
/// a secondary press fires a single burst.
#[derive(Debug, Default)]
pub struct PointerInput {
    /// Primary button held and captured
    emitting: bool,
    /// Last known pointer position
    position: Vec2,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one pointer event, returning the emission it triggers (if any)
    pub fn process(&mut self, event: PointerEvent) -> Option<EmitRequest> {
        match event {
            PointerEvent::Pressed(position) => {
                self.emitting = true;
                self.position = position;
                Some(EmitRequest {
                    position,
                    burst: false,
                })
            }
            PointerEvent::Moved(position) => {
                self.position = position;
                self.emitting.then_some(EmitRequest {
                    position,
                    burst: false,
                })
            }
            PointerEvent::Released => {
                self.emitting = false;
                None
            }
            PointerEvent::SecondaryPressed(position) => {
                self.position = position;
                Some(EmitRequest {
                    position,
                    burst: true,
                })
            }
        }
    }

    /// Is the primary button currently streaming particles?
    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    /// Last pointer position seen
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_drag_release() {
        let mut input = PointerInput::new();
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(15.0, 25.0);

        let req = input.process(PointerEvent::Pressed(a)).unwrap();
        assert_eq!(req, EmitRequest { position: a, burst: false });
        assert!(input.is_emitting());

        let req = input.process(PointerEvent::Moved(b)).unwrap();
        assert_eq!(req.position, b);
        assert!(!req.burst);

        assert!(input.process(PointerEvent::Released).is_none());
        assert!(!input.is_emitting());
    }

    #[test]
    fn test_move_without_capture_emits_nothing() {
        let mut input = PointerInput::new();
        let p = Vec2::new(3.0, 4.0);
        assert!(input.process(PointerEvent::Moved(p)).is_none());
        assert_eq!(input.position(), p);
    }

    #[test]
    fn test_secondary_press_is_burst() {
        let mut input = PointerInput::new();
        let p = Vec2::new(50.0, 60.0);
        let req = input.process(PointerEvent::SecondaryPressed(p)).unwrap();
        assert!(req.burst);
        assert_eq!(req.position, p);
        // A burst does not start continuous emission
        assert!(!input.is_emitting());
    }
}
