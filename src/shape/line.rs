//! Stroked straight line segment with flat (butt) caps.

use palette::Srgb;

use super::Primitive;
use crate::color::to_hex;
use crate::geometry::{PointPx, RectPx};

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: PointPx,
    pub end: PointPx,
    pub color: Srgb<u8>,
    pub width: u32,
}

impl Line {
    pub fn new(start: PointPx, end: PointPx, color: Srgb<u8>, width: u32) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }

    /// A horizontal line at `y` spanning `x1..x2`.
    pub fn horizontal(x1: u32, x2: u32, y: u32, color: Srgb<u8>, width: u32) -> Self {
        Self::new(PointPx::new(x1, y), PointPx::new(x2, y), color, width)
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

impl Primitive for Line {
    fn name(&self) -> &'static str {
        "line"
    }

    /// Butt caps do not extend past the endpoints, so axis-aligned lines only
    /// grow across their direction. Diagonals are bounded conservatively.
    fn bounds(&self) -> RectPx {
        let half = self.width.div_ceil(2);
        let (grow_x, grow_y) = match (self.is_horizontal(), self.is_vertical()) {
            (true, false) => (0, half),
            (false, true) => (half, 0),
            _ => (half, half),
        };

        let left = self.start.x.min(self.end.x).saturating_sub(grow_x);
        let top = self.start.y.min(self.end.y).saturating_sub(grow_y);
        let right = self.start.x.max(self.end.x) + grow_x;
        let bottom = self.start.y.max(self.end.y) + grow_y;
        RectPx::new(left, top, right - left, bottom - top)
    }

    fn write_svg(&self, out: &mut String) {
        out.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="butt"/>"#,
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            to_hex(self.color),
            self.width,
        ));
    }
}
