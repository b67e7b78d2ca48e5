//! Pixel-space geometry for laying out icon shapes.

use std::fmt;

/// A point in pixel coordinates, origin at the top-left of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointPx {
    pub x: u32,
    pub y: u32,
}

impl PointPx {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PointPx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a size with equal width and height.
    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns the midpoint of a surface of this size.
    pub fn center(&self) -> PointPx {
        PointPx::new(self.width / 2, self.height / 2)
    }
}

/// A rectangle defined in pixel coordinates.
///
/// `x`/`y` is the top-left corner; [`right`](Self::right) and
/// [`bottom`](Self::bottom) give the opposite corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the canvas
    pub x: u32,
    /// Y offset from the top edge of the canvas
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(size: SizePx) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Creates a rectangle of `size` whose center is `center`.
    ///
    /// Odd dimensions round the top-left corner down.
    pub fn centered(center: PointPx, size: SizePx) -> Self {
        Self::new(
            center.x.saturating_sub(size.width / 2),
            center.y.saturating_sub(size.height / 2),
            size.width,
            size.height,
        )
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> PointPx {
        PointPx::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> PointPx {
        PointPx::new(self.right(), self.bottom())
    }

    /// Returns true if `other` lies entirely inside this rectangle (edges included).
    pub fn contains_rect(&self, other: &RectPx) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

impl fmt::Display for RectPx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.top_left(), self.bottom_right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_px_new() {
        let rect = RectPx::new(10, 20, 100, 200);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 20);
        assert_eq!(rect.width, 100);
        assert_eq!(rect.height, 200);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 220);
    }

    #[test]
    fn centered_rect_on_icon_canvas() {
        let center = SizePx::square(1024).center();
        assert_eq!(center, PointPx::new(512, 512));

        let cover = RectPx::centered(center, SizePx::new(500, 600));
        assert_eq!(cover.top_left(), PointPx::new(262, 212));
        assert_eq!(cover.bottom_right(), PointPx::new(762, 812));
    }

    #[test]
    fn contains_rect_includes_edges() {
        let outer = RectPx::new(0, 0, 100, 100);
        assert!(outer.contains_rect(&outer));
        assert!(outer.contains_rect(&RectPx::new(10, 10, 90, 90)));
        assert!(!outer.contains_rect(&RectPx::new(10, 10, 91, 10)));
    }

    #[test]
    fn single_pixel_containment() {
        let rect = RectPx::new(5, 5, 10, 10);
        assert!(rect.contains_rect(&RectPx::new(5, 5, 1, 1)));
        assert!(rect.contains_rect(&RectPx::new(14, 14, 1, 1)));
        assert!(!rect.contains_rect(&RectPx::new(15, 14, 1, 1)));
        assert!(!rect.contains_rect(&RectPx::new(4, 10, 1, 1)));
    }

    #[test]
    fn square_size() {
        assert_eq!(SizePx::square(100), SizePx::new(100, 100));
    }

    #[test]
    fn rect_display() {
        assert_eq!(RectPx::new(1, 2, 3, 4).to_string(), "(1, 2)-(4, 6)");
    }
}
