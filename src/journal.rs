//! Layout of the journal icon.
//!
//! All dimensions are fixed constants. [`JournalLayout::standard`] derives the
//! concrete rectangles and line positions from them, and
//! [`JournalLayout::compose`] paints them onto a [`Canvas`].

use log::debug;
use palette::Srgb;

use crate::canvas::Canvas;
use crate::color::JournalPalette;
use crate::error::{IconError, Result};
use crate::geometry::{RectPx, SizePx};
use crate::shape::{Line, Primitive};

/// Side length of the square canvas.
pub const CANVAS_SIZE: u32 = 1024;

pub const COVER_WIDTH: u32 = 500;
pub const COVER_HEIGHT: u32 = 600;
pub const CORNER_RADIUS: u32 = 60;

pub const SPINE_WIDTH: u32 = 60;

pub const PAGE_LINE_COUNT: usize = 4;
pub const PAGE_LINE_WIDTH: u32 = 20;
/// Horizontal gap between a page line and the spine / right cover edge.
pub const PAGE_LINE_INSET: u32 = 40;
/// Offset of the first page line from the top of the cover.
pub const PAGE_LINE_TOP: u32 = 100;
pub const PAGE_LINE_GAP: u32 = 80;

/// Concrete geometry of the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLayout {
    pub canvas: SizePx,
    pub cover: RectPx,
    pub spine: RectPx,
    pub corner_radius: u32,
    pub page_line_x1: u32,
    pub page_line_x2: u32,
    pub page_line_ys: [u32; PAGE_LINE_COUNT],
    pub page_line_width: u32,
}

impl JournalLayout {
    /// Computes the layout from the built-in constants.
    pub fn standard() -> Self {
        let canvas = SizePx::square(CANVAS_SIZE);
        let cover = RectPx::centered(canvas.center(), SizePx::new(COVER_WIDTH, COVER_HEIGHT));
        let spine = RectPx::new(cover.x, cover.y, SPINE_WIDTH, cover.height);

        let start_y = cover.y + PAGE_LINE_TOP;
        let page_line_ys = std::array::from_fn(|i| start_y + i as u32 * PAGE_LINE_GAP);

        Self {
            canvas,
            cover,
            spine,
            corner_radius: CORNER_RADIUS,
            page_line_x1: spine.right() + PAGE_LINE_INSET,
            page_line_x2: cover.right() - PAGE_LINE_INSET,
            page_line_ys,
            page_line_width: PAGE_LINE_WIDTH,
        }
    }

    /// Builds the page line primitives in `color`.
    pub(crate) fn page_lines(&self, color: Srgb<u8>) -> Vec<Line> {
        self.page_line_ys
            .iter()
            .map(|&y| {
                Line::horizontal(
                    self.page_line_x1,
                    self.page_line_x2,
                    y,
                    color,
                    self.page_line_width,
                )
            })
            .collect()
    }

    /// The part of the cover to the right of the spine, where pages are drawn.
    pub fn page_area(&self) -> RectPx {
        RectPx::new(
            self.spine.right(),
            self.cover.y,
            self.cover.right().saturating_sub(self.spine.right()),
            self.cover.height,
        )
    }

    /// Checks that every shape stays where it is meant to be:
    /// the cover inside the canvas, the spine inside the cover, and each page
    /// line (stroke included) inside the page area.
    pub fn validate(&self) -> Result<()> {
        if !RectPx::from_size(self.canvas).contains_rect(&self.cover) {
            return Err(out_of_bounds("cover", self.cover, "canvas"));
        }
        if !self.cover.contains_rect(&self.spine) {
            return Err(out_of_bounds("spine", self.spine, "cover"));
        }

        let page_area = self.page_area();
        for line in self.page_lines(Srgb::new(0, 0, 0)) {
            let bounds = line.bounds();
            if !page_area.contains_rect(&bounds) {
                return Err(out_of_bounds("page line", bounds, "page area"));
            }
        }
        Ok(())
    }

    /// Paints the journal onto a fresh canvas: cover, spine, then page lines.
    pub(crate) fn compose(&self, palette: &JournalPalette) -> Canvas {
        debug!(
            "cover {} spine {} page lines at y={:?}",
            self.cover, self.spine, self.page_line_ys
        );

        let mut canvas = Canvas::new(self.canvas.width, palette.background);
        canvas.fill_rounded_rect(self.cover, self.corner_radius, palette.accent);
        canvas.fill_rounded_rect(self.spine, self.corner_radius, palette.spine);
        for line in self.page_lines(palette.page_line()) {
            canvas.draw(line);
        }
        debug!("composed {} shapes", canvas.shapes().len());
        canvas
    }
}

fn out_of_bounds(shape: &'static str, bounds: RectPx, container: &'static str) -> IconError {
    IconError::OutOfBounds {
        shape,
        bounds: bounds.to_string(),
        container,
    }
}
