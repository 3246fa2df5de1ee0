//! Renderer-agnostic particle appearance

use flurry_core::Color;
use serde::Serialize;

/// Outline a renderer should draw for a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Ellipse,
    Rectangle,
}

/// One color stop of a gradient; `offset` runs from 0 (center) to 1 (edge)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient fill. `center` is in shape-relative units, (0.5, 0.5) is the middle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialGradient {
    pub center: [f64; 2],
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub const CENTER: [f64; 2] = [0.5, 0.5];

    pub fn new(center: [f64; 2], stops: Vec<GradientStop>) -> Self {
        Self { center, stops }
    }

    /// Centered two-stop gradient from `inner` to `outer`
    pub fn fade(inner: Color, outer: Color) -> Self {
        Self::new(
            Self::CENTER,
            vec![GradientStop::new(0.0, inner), GradientStop::new(1.0, outer)],
        )
    }

    /// Color at the center stop
    pub fn inner_color(&self) -> Option<Color> {
        self.stops.first().map(|s| s.color)
    }
}

/// Everything a renderer needs to draw one particle.
///
/// Owned by the particle; renderers only read it and keep their own
/// drawable keyed by the particle's id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualDescriptor {
    pub shape: ShapeKind,
    pub width: f64,
    pub height: f64,
    /// 0 = invisible, 1 = opaque
    pub opacity: f64,
    pub fill: RadialGradient,
}

impl VisualDescriptor {
    pub fn new(shape: ShapeKind, width: f64, height: f64, fill: RadialGradient) -> Self {
        Self {
            shape,
            width,
            height,
            opacity: 1.0,
            fill,
        }
    }

    /// Top-left corner when the shape is centered on `position`
    pub fn top_left(&self, position: flurry_core::Vec2) -> flurry_core::Vec2 {
        flurry_core::Vec2::new(position.x - self.width / 2.0, position.y - self.height / 2.0)
    }
}
