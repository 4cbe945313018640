pub mod bitmap;
pub mod locate;
pub mod scalable;

use std::path::PathBuf;

use log::debug;

pub use bitmap::BitmapFont;
pub use locate::{system_font_dirs, PreferredFont};
pub use scalable::ScalableFont;

use crate::raster::mask::GlyphMask;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font {0:?} not found")]
    NotFound(PathBuf),
    #[error("failed to read font {path:?}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("font data contains no usable face")]
    NoFaces,
}

/// Font used to draw a label, either the preferred face or the built-in fallback.
#[derive(Debug)]
pub enum LabelFont {
    Scalable(ScalableFont),
    Bitmap(BitmapFont),
}

impl LabelFont {
    /// Pixel size requested for a canvas of `size`, truncated and at least one.
    pub fn pixel_size(size: u32, scale: f32) -> u32 {
        ((size as f32 * scale) as u32).max(1)
    }

    pub fn load(preferred: &PreferredFont, px: u32) -> Result<Self, FontError> {
        let path = preferred.locate().ok_or_else(|| FontError::NotFound(preferred.name.clone()))?;
        let data = std::fs::read(&path).map_err(|source| FontError::Read { path, source })?;
        Ok(Self::Scalable(ScalableFont::from_bytes(data, px as f32)?))
    }

    /// Load the preferred font, substituting the bitmap font on any failure.
    pub fn select(preferred: &PreferredFont, size: u32, scale: f32) -> Self {
        let px = Self::pixel_size(size, scale);
        match Self::load(preferred, px) {
            Ok(font) => font,
            Err(err) => {
                debug!("using built-in bitmap font for {size}px icon: {err}");
                Self::Bitmap(BitmapFont)
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap(_))
    }

    pub fn rasterize(&mut self, text: &str) -> GlyphMask {
        match self {
            Self::Scalable(font) => font.rasterize(text),
            Self::Bitmap(font) => font.rasterize(text),
        }
    }
}
