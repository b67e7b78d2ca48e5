//! Square drawing surface backed by resvg.
//!
//! Shapes are queued on the [`Canvas`] in paint order. Rasterizing turns the
//! queue into an SVG document and renders it with resvg onto a pixmap that
//! was pre-filled with the background color.

use image::{Rgba, RgbaImage};
use log::debug;
use palette::Srgb;
use resvg::tiny_skia::{self, Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::color::to_hex;
use crate::error::{IconError, Result};
use crate::geometry::{RectPx, SizePx};
use crate::shape::{Primitive, RoundedRect, Shape};

// ============================================================================
// Canvas
// ============================================================================

/// A square raster surface with a flat background and an ordered list of shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: SizePx,
    background: Srgb<u8>,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Creates an empty square canvas of `side` pixels.
    pub fn new(side: u32, background: Srgb<u8>) -> Self {
        Self {
            size: SizePx::square(side),
            background,
            shapes: Vec::new(),
        }
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Queues a shape on top of everything drawn so far.
    pub fn draw(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        debug!("draw {} at {}", shape.name(), shape.bounds());
        self.shapes.push(shape);
    }

    pub fn fill_rounded_rect(&mut self, rect: RectPx, radius: u32, fill: Srgb<u8>) {
        self.draw(RoundedRect::new(rect, radius, fill));
    }

    /// Serializes the queued shapes as a standalone SVG document.
    ///
    /// The background is not part of the document; [`rasterize`](Self::rasterize)
    /// paints it directly onto the pixmap.
    pub fn to_svg(&self) -> String {
        let SizePx { width, height } = self.size;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" shape-rendering="crispEdges">"#
        );
        for shape in &self.shapes {
            shape.write_svg(&mut svg);
        }
        svg.push_str("</svg>");
        svg
    }

    /// Renders the canvas into an RGBA image.
    pub fn rasterize(&self) -> Result<RgbaImage> {
        let SizePx { width, height } = self.size;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(IconError::CanvasAllocation { width, height })?;

        let bg = self.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.red, bg.green, bg.blue, 255));
        debug!("filled {width}x{height} canvas with {}", to_hex(bg));

        let tree = Tree::from_str(&self.to_svg(), &Options::default())?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap_to_rgba_image(&pixmap))
    }
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    // tiny_skia stores premultiplied alpha
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    img
}
