use std::collections::BTreeMap;

use image::{Rgb, RgbImage};

use super::canvas::blend;

/// Pixel extents of rendered ink, relative to the drawing origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Coverage of a label rasterized with its origin at (0, 0).
#[derive(Clone, Debug, Default)]
pub struct GlyphMask {
    coverage: BTreeMap<(i32, i32), u8>,
}

impl GlyphMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.coverage.is_empty()
    }

    pub fn coverage_at(&self, x: i32, y: i32) -> u8 {
        self.coverage.get(&(y, x)).copied().unwrap_or(0)
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, alpha: u8) {
        if alpha == 0 {
            return;
        }

        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                let entry = self.coverage.entry((y + dy, x + dx)).or_insert(0);
                *entry = (*entry).max(alpha);
            }
        }
    }

    pub fn bounds(&self) -> TextBounds {
        let mut pixels = self.coverage.keys();
        let Some(&(y, x)) = pixels.next() else {
            return TextBounds::default();
        };

        let mut bounds = TextBounds { left: x, top: y, right: x + 1, bottom: y + 1 };
        for &(y, x) in pixels {
            bounds.left = bounds.left.min(x);
            bounds.top = bounds.top.min(y);
            bounds.right = bounds.right.max(x + 1);
            bounds.bottom = bounds.bottom.max(y + 1);
        }
        bounds
    }

    /// Blend the mask onto `canvas` with its origin moved to `origin`.
    pub fn composite(&self, canvas: &mut RgbImage, origin: (i32, i32), fg: Rgb<u8>) {
        let (width, height) = canvas.dimensions();
        for (&(y, x), &alpha) in &self.coverage {
            let (Ok(cx), Ok(cy)) = (u32::try_from(origin.0 + x), u32::try_from(origin.1 + y))
            else {
                continue;
            };
            if cx >= width || cy >= height {
                continue;
            }

            let pixel = canvas.get_pixel_mut(cx, cy);
            *pixel = blend(*pixel, fg, alpha);
        }
    }
}
