//! Writing the rendered icon to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::{info, warn};

use crate::error::{IconError, Result};

/// Picks the raster encoder from the file extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| format.writing_enabled())
        .ok_or_else(|| IconError::UnsupportedFormat(path.to_path_buf()))
}

/// Encodes `image` into `path`, replacing any existing file.
///
/// The icon is fully opaque, so it is written as 8-bit RGB; this also keeps
/// alpha-less formats such as JPEG usable. If encoding fails after the file
/// was created, the partial file is removed.
pub fn save(image: &RgbaImage, path: &Path) -> Result<()> {
    let format = format_for_path(path)?;
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();

    let mut writer = BufWriter::new(File::create(path)?);
    let written = rgb
        .write_to(&mut writer, format)
        .map_err(IconError::from)
        .and_then(|()| writer.flush().map_err(IconError::from));

    if let Err(err) = written {
        drop(writer);
        discard_partial(path);
        return Err(err);
    }

    info!(
        "wrote {}x{} {:?} icon to {}",
        image.width(),
        image.height(),
        format,
        path.display()
    );
    Ok(())
}

fn discard_partial(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        warn!("could not remove partial file {}: {err}", path.display());
    }
}
