//! Flat colors used by the journal icon.
//!
//! Colors are kept as hex strings so they read the same way a designer
//! hands them over, and are parsed into [`Srgb<u8>`] when the scene is built.

use palette::Srgb;

use crate::error::{IconError, Result};

/// Deep matte charcoal. Canvas background and page lines.
pub const BACKGROUND: &str = "#1A1A1D";

/// Salmon orange. Book cover.
pub const ACCENT: &str = "#FF8A73";

/// Slightly darker orange. Spine strip.
pub const SPINE: &str = "#E67A64";

/// Parses a `#rrggbb` (or `#rgb`) string.
pub fn parse_hex(value: &str) -> Result<Srgb<u8>> {
    value
        .parse::<Srgb<u8>>()
        .map_err(|source| IconError::InvalidColor {
            value: value.to_string(),
            source,
        })
}

/// Formats a color as lowercase `#rrggbb` for SVG attributes.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// The resolved set of colors the journal is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JournalPalette {
    pub background: Srgb<u8>,
    pub accent: Srgb<u8>,
    pub spine: Srgb<u8>,
}

impl JournalPalette {
    /// Parses the built-in color constants.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            background: parse_hex(BACKGROUND)?,
            accent: parse_hex(ACCENT)?,
            spine: parse_hex(SPINE)?,
        })
    }

    /// Page lines are cut out of the cover in the background color.
    pub fn page_line(&self) -> Srgb<u8> {
        self.background
    }
}
