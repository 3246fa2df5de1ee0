//! Viewport and the culling rectangle derived from it

use crate::profile::SystemType;
use flurry_core::Vec2;
use serde::Serialize;

/// Visible drawing area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// How far past the viewport a particle may travel before it is culled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Slack left of 0 and right of the viewport width
    pub side_margin: f64,
    /// Slack below the viewport height
    pub bottom_margin: f64,
    /// Particles above this y are culled, unless the active type is smoke
    pub ceiling: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            side_margin: 50.0,
            bottom_margin: 50.0,
            ceiling: -100.0,
        }
    }
}

/// The rectangle live particles must stay inside for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullRegion {
    pub min_x: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// `None` when the ceiling is exempted
    pub min_y: Option<f64>,
}

impl CullRegion {
    pub fn new(viewport: Viewport, bounds: Bounds, system_type: SystemType) -> Self {
        Self {
            min_x: -bounds.side_margin,
            max_x: viewport.width + bounds.side_margin,
            max_y: viewport.height + bounds.bottom_margin,
            min_y: (!system_type.exempt_from_ceiling()).then_some(bounds.ceiling),
        }
    }

    pub fn contains(&self, position: Vec2) -> bool {
        if position.x < self.min_x || position.x > self.max_x || position.y > self.max_y {
            return false;
        }
        match self.min_y {
            Some(min_y) => position.y >= min_y,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(ty: SystemType) -> CullRegion {
        CullRegion::new(Viewport::default(), Bounds::default(), ty)
    }

    #[test]
    fn edges_with_margins() {
        let r = region(SystemType::Water);
        assert!(r.contains(Vec2::new(-50.0, 0.0)));
        assert!(!r.contains(Vec2::new(-50.1, 0.0)));
        assert!(r.contains(Vec2::new(850.0, 0.0)));
        assert!(!r.contains(Vec2::new(850.1, 0.0)));
        assert!(r.contains(Vec2::new(0.0, 650.0)));
        assert!(!r.contains(Vec2::new(0.0, 650.1)));
    }

    #[test]
    fn ceiling_applies_except_for_smoke() {
        let above = Vec2::new(400.0, -150.0);
        assert!(!region(SystemType::Water).contains(above));
        assert!(!region(SystemType::Sparks).contains(above));
        assert!(region(SystemType::Smoke).contains(above));
    }

    #[test]
    fn smoke_still_culled_at_sides_and_bottom() {
        let r = region(SystemType::Smoke);
        assert!(!r.contains(Vec2::new(-60.0, -500.0)));
        assert!(!r.contains(Vec2::new(400.0, 700.0)));
    }
}
