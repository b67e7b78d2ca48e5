//! journal-icon: procedural application icon generator
//!
//! Draws a flat, geometric book/journal (a rounded cover, a darker spine
//! strip and four page lines) on a 1024x1024 charcoal canvas and saves it
//! as a raster image.
//!
//! # Example
//!
//! ```no_run
//! // Writes ./app_icon.png
//! let path = journal_icon::generate_icon()?;
//! println!("Icon created: {}", path.display());
//! # Ok::<(), journal_icon::IconError>(())
//! ```
//!
//! Rendering without touching the filesystem:
//!
//! ```
//! let image = journal_icon::render_icon()?;
//! assert_eq!(image.dimensions(), (1024, 1024));
//! # Ok::<(), journal_icon::IconError>(())
//! ```

mod canvas;
mod color;
mod error;
mod export;
mod geometry;
mod journal;
mod shape;

use std::path::{Path, PathBuf};

use image::RgbaImage;

pub use color::JournalPalette;
pub use error::{IconError, Result};
pub use geometry::{PointPx, RectPx, SizePx};
pub use journal::JournalLayout;

/// File the icon is written to, relative to the working directory.
pub const OUTPUT_PATH: &str = "app_icon.png";

/// Renders the journal icon in memory.
pub fn render_icon() -> Result<RgbaImage> {
    let layout = JournalLayout::standard();
    layout.validate()?;
    let palette = JournalPalette::standard()?;
    layout.compose(&palette).rasterize()
}

/// Renders the icon and writes it to `path`, format chosen by extension.
pub fn generate_icon_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    // Fail on a bad extension before doing any drawing.
    export::format_for_path(path)?;
    let image = render_icon()?;
    export::save(&image, path)
}

/// Renders the icon to [`OUTPUT_PATH`], overwriting any existing file.
pub fn generate_icon() -> Result<PathBuf> {
    let path = PathBuf::from(OUTPUT_PATH);
    generate_icon_at(&path)?;
    Ok(path)
}
