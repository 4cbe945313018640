mod font;
mod raster;

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use log::info;

pub use font::{
    system_font_dirs, BitmapFont, FontError, LabelFont, PreferredFont, ScalableFont,
};
pub use raster::{
    color::{parse_color, ColorError},
    layout::centered_origin,
    mask::{GlyphMask, TextBounds},
};

use raster::canvas;

pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to encode icon: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to prepare {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("icon size must be at least one pixel")]
    InvalidSize,
}

#[derive(Clone, Debug)]
pub struct IconOptions {
    pub label: String,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub font: PreferredFont,
    /// Font pixel size as a fraction of the icon size.
    pub font_scale: f32,
    /// Output files are named `{prefix}{size}.png`.
    pub prefix: String,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            label: "N".to_owned(),
            background: Rgb([0x23, 0x83, 0xe2]),
            foreground: Rgb([0xff, 0xff, 0xff]),
            font: PreferredFont::default(),
            font_scale: 0.6,
            prefix: "icon".to_owned(),
        }
    }
}

impl IconOptions {
    pub fn file_name(&self, size: u32) -> String {
        format!("{}{}.png", self.prefix, size)
    }
}

#[derive(Clone, Debug)]
pub struct RenderedIcon {
    pub image: RgbImage,
    /// Ink extents of the label drawn at the origin.
    pub bounds: TextBounds,
    /// Position the label origin was drawn at.
    pub origin: (i32, i32),
    pub used_fallback: bool,
}

#[derive(Default)]
pub struct IconRenderer;

impl IconRenderer {
    pub fn render(&self, size: u32, options: &IconOptions) -> Result<RenderedIcon, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize);
        }

        let mut image = canvas::blank_canvas(size, options.background);
        let mut font = LabelFont::select(&options.font, size, options.font_scale);

        let mask = font.rasterize(&options.label);
        let bounds = mask.bounds();
        let origin = centered_origin(size, bounds);
        mask.composite(&mut image, origin, options.foreground);

        Ok(RenderedIcon { image, bounds, origin, used_fallback: font.is_fallback() })
    }

    /// Render and write a PNG into `out_dir`, replacing any existing file.
    pub fn write_icon(
        &self,
        size: u32,
        options: &IconOptions,
        out_dir: &Path,
    ) -> Result<PathBuf, IconError> {
        let icon = self.render(size, options)?;
        let path = out_dir.join(options.file_name(size));
        icon.image.save_with_format(&path, image::ImageFormat::Png)?;
        info!("wrote {}x{} icon to {}", size, size, path.display());
        Ok(path)
    }

    /// Write one icon per size, in order, calling `on_written` after each file.
    pub fn generate_all<F>(
        &self,
        sizes: &[u32],
        options: &IconOptions,
        out_dir: &Path,
        mut on_written: F,
    ) -> Result<Vec<PathBuf>, IconError>
    where
        F: FnMut(&Path),
    {
        std::fs::create_dir_all(out_dir)
            .map_err(|source| IconError::Io { path: out_dir.to_path_buf(), source })?;

        let mut written = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let path = self.write_icon(size, options, out_dir)?;
            on_written(&path);
            written.push(path);
        }
        Ok(written)
    }
}
