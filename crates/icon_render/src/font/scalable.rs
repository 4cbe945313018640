use cosmic_text::{
    fontdb, Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache,
};

use super::FontError;
use crate::raster::mask::GlyphMask;

const LINE_HEIGHT: f32 = 1.2;

/// A TrueType/OpenType face rendered through cosmic-text at a fixed pixel size.
pub struct ScalableFont {
    font_system: FontSystem,
    cache: SwashCache,
    family: String,
    px: f32,
}

impl std::fmt::Debug for ScalableFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableFont").field("family", &self.family).field("px", &self.px).finish()
    }
}

impl ScalableFont {
    pub fn from_bytes(data: Vec<u8>, px: f32) -> Result<Self, FontError> {
        let mut db = fontdb::Database::new();
        db.load_font_data(data);

        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or(FontError::NoFaces)?;

        let font_system = FontSystem::new_with_locale_and_db("en-US".to_owned(), db);
        Ok(Self { font_system, cache: SwashCache::new(), family, px })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    pub fn rasterize(&mut self, text: &str) -> GlyphMask {
        let metrics = Metrics::new(self.px, (self.px * LINE_HEIGHT).ceil());
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);

        let attrs = Attrs::new().family(Family::Name(&self.family));
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut mask = GlyphMask::new();
        buffer.draw(
            &mut self.font_system,
            &mut self.cache,
            Color::rgb(0xff, 0xff, 0xff),
            |x, y, width, height, color| mask.fill_rect(x, y, width, height, color.a()),
        );
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::PreferredFont;

    #[test]
    fn garbage_data_has_no_faces() {
        let err = ScalableFont::from_bytes(b"definitely not a font".to_vec(), 12.0).unwrap_err();
        assert!(matches!(err, FontError::NoFaces));
    }

    // Runs only where a common system face is installed.
    #[test]
    fn system_face_produces_ink_within_em() {
        let Some(path) = ["DejaVuSans.ttf", "LiberationSans-Regular.ttf", "Arial.ttf"]
            .into_iter()
            .find_map(|name| PreferredFont::new(name).locate())
        else {
            return;
        };

        let data = std::fs::read(&path).unwrap();
        let mut font = ScalableFont::from_bytes(data, 76.0).unwrap();
        let bounds = font.rasterize("N").bounds();

        assert!(bounds.width() > 0 && bounds.width() <= 76);
        assert!(bounds.height() > 0 && bounds.height() <= 92);
    }
}
