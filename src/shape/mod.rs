//! Drawable primitives.
//!
//! Each primitive knows its pixel bounds (for layout validation) and how to
//! describe itself as an SVG element (for rasterization by the canvas).

pub mod line;
pub mod rounded_rect;

pub use line::Line;
pub use rounded_rect::RoundedRect;

use crate::geometry::RectPx;

// ============================================================================
// Primitive Trait
// ============================================================================

/// Trait for anything that can be painted onto a [`Canvas`](crate::Canvas).
pub trait Primitive {
    /// Short human-readable name used in logs and errors.
    fn name(&self) -> &'static str;

    /// The pixel area the primitive may paint, stroke included.
    fn bounds(&self) -> RectPx;

    /// Appends this primitive as a single SVG element.
    fn write_svg(&self, out: &mut String);
}

// ============================================================================
// Shape
// ============================================================================

/// A primitive queued on a canvas. Shapes are painted in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    RoundedRect(RoundedRect),
    Line(Line),
}

impl Primitive for Shape {
    fn name(&self) -> &'static str {
        match self {
            Self::RoundedRect(rect) => rect.name(),
            Self::Line(line) => line.name(),
        }
    }

    fn bounds(&self) -> RectPx {
        match self {
            Self::RoundedRect(rect) => rect.bounds(),
            Self::Line(line) => line.bounds(),
        }
    }

    fn write_svg(&self, out: &mut String) {
        match self {
            Self::RoundedRect(rect) => rect.write_svg(out),
            Self::Line(line) => line.write_svg(out),
        }
    }
}

impl From<RoundedRect> for Shape {
    fn from(rect: RoundedRect) -> Self {
        Self::RoundedRect(rect)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}
