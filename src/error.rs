//! Error type shared by every stage of icon generation.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building, rasterizing or saving an icon.
///
/// All of these are environment failures (or a broken constant); none are
/// recovered from locally.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    #[error("failed to allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("failed to parse icon scene: {0}")]
    Scene(#[from] resvg::usvg::Error),

    #[error("cannot infer a raster format from {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("{shape} at {bounds} falls outside {container}")]
    OutOfBounds {
        shape: &'static str,
        bounds: String,
        container: &'static str,
    },

    #[error("failed to write icon: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode icon: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, IconError>;
