//! Filled rectangle with rounded corners.

use palette::Srgb;

use super::Primitive;
use crate::color::to_hex;
use crate::geometry::RectPx;

/// A filled rectangle whose corners are rounded by `radius` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRect {
    pub rect: RectPx,
    /// Requested corner radius. See [`effective_radius`](Self::effective_radius).
    pub radius: u32,
    pub fill: Srgb<u8>,
}

impl RoundedRect {
    pub fn new(rect: RectPx, radius: u32, fill: Srgb<u8>) -> Self {
        Self { rect, radius, fill }
    }

    /// The radius actually drawn: never more than half the shorter side.
    ///
    /// Both axes use the same value so corners stay circular.
    pub fn effective_radius(&self) -> f32 {
        let half_short = self.rect.width.min(self.rect.height) as f32 / 2.0;
        (self.radius as f32).min(half_short)
    }
}

impl Primitive for RoundedRect {
    fn name(&self) -> &'static str {
        "rounded rectangle"
    }

    fn bounds(&self) -> RectPx {
        self.rect
    }

    fn write_svg(&self, out: &mut String) {
        let r = self.effective_radius();
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}"/>"#,
            self.rect.x,
            self.rect.y,
            self.rect.width,
            self.rect.height,
            to_hex(self.fill),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_clamped_to_half_short_side() {
        let spine = RoundedRect::new(RectPx::new(262, 212, 60, 600), 60, Srgb::new(0, 0, 0));
        assert_eq!(spine.effective_radius(), 30.0);

        let cover = RoundedRect::new(RectPx::new(262, 212, 500, 600), 60, Srgb::new(0, 0, 0));
        assert_eq!(cover.effective_radius(), 60.0);
    }

    #[test]
    fn writes_svg_rect() {
        let rect = RoundedRect::new(RectPx::new(1, 2, 30, 40), 5, Srgb::new(0xFF, 0x8A, 0x73));
        let mut svg = String::new();
        rect.write_svg(&mut svg);
        assert_eq!(
            svg,
            r##"<rect x="1" y="2" width="30" height="40" rx="5" ry="5" fill="#ff8a73"/>"##
        );
    }
}
