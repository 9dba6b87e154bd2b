use std::fmt;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::raster::{self, DrawError, Surface};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading, so a populated system can be shared
/// across threads rendering independent frames. Labels are rasterized on
/// demand and blitted straight onto the CPU surface.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw calls.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Returns `(width, height)` in pixels. Uses the pen position after each
    /// glyph rather than the bitmap right edge, matching the positions
    /// [`draw_text`](FontSystem::draw_text) actually places glyphs at.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }

    /// Rasterizes `text` and blits it onto `surface` with `origin` at the
    /// top-left of the first line.
    ///
    /// Unknown `id` draws nothing; the caller decided labels are best-effort.
    pub fn draw_text(
        &self,
        surface: &mut Surface,
        text: &str,
        id: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) -> Result<(), DrawError> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        surface.ensure_writable()?;
        let Some(font) = self.get(id) else {
            return Ok(());
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (metrics, coverage) = font.rasterize_config(glyph.key);
            raster::blit_coverage(
                surface,
                (origin.x + glyph.x).round() as i32,
                (origin.y + glyph.y).round() as i32,
                metrics.width,
                metrics.height,
                &coverage,
                color,
            )?;
        }
        Ok(())
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
