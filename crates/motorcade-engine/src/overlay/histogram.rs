use crate::coords::{Rect, Vec2};
use crate::paint::{Color, palette};
use crate::raster::{self, DrawError, Surface};

/// Bar gauge: a bordered rectangle filled from the bottom up to a
/// proportion of its height.
///
/// Anchored in surface space so gauges stay put while the camera follows
/// traffic. `pos` is the top-left corner in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramOverlay {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Fill proportion in `[0, 1]`; out-of-range input is clamped, 0 draws
    /// no fill and 1 fills the full inner height.
    value: f32,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f32,
}

impl HistogramOverlay {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            width: width.max(0.0),
            height: height.max(0.0),
            value: 0.0,
            fill_color: palette::GAUGE_FILL,
            border_color: palette::GAUGE_BORDER,
            border_width: 1.0,
        }
    }

    /// Sets the fill proportion, clamped into `[0, 1]`.
    pub fn value(mut self, v: f32) -> Self {
        self.value = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        self
    }

    pub fn fill_color(mut self, v: Color) -> Self { self.fill_color = v; self }
    pub fn border_color(mut self, v: Color) -> Self { self.border_color = v; self }
    pub fn border_width(mut self, v: f32) -> Self { self.border_width = v.max(0.0); self }

    /// Current fill proportion.
    #[inline]
    pub fn current(&self) -> f32 {
        self.value
    }

    pub(crate) fn draw(&self, surface: &mut Surface) -> Result<(), DrawError> {
        let outer = Rect::from_origin_size(self.pos, Vec2::new(self.width, self.height));
        if self.border_width > 0.0 {
            raster::stroke_rect(surface, outer, self.border_width, self.border_color)?;
        }

        let inset = self.border_width;
        let inner = Rect::new(
            outer.origin.x + inset,
            outer.origin.y + inset,
            (self.width - 2.0 * inset).max(0.0),
            (self.height - 2.0 * inset).max(0.0),
        );

        let fill_height = inner.size.y * self.value;
        if fill_height <= 0.0 {
            return surface.ensure_writable();
        }
        let fill = Rect::new(
            inner.origin.x,
            inner.origin.y + inner.size.y - fill_height,
            inner.size.x,
            fill_height,
        );
        raster::fill_rect(surface, fill, self.fill_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Rgba8;

    const FILL: Color = Color::opaque(0.0, 0.0, 1.0);
    const FILL8: Rgba8 = Rgba8 { r: 0, g: 0, b: 255, a: 255 };

    fn gauge(value: f32) -> HistogramOverlay {
        HistogramOverlay::new(Vec2::new(2.0, 2.0), 10.0, 20.0)
            .value(value)
            .fill_color(FILL)
    }

    fn drawn(value: f32) -> Surface {
        let mut surface = Surface::new(16, 26, Color::transparent());
        gauge(value).draw(&mut surface).unwrap();
        surface
    }

    // Boundary policy: out-of-range values clamp, exhaustively at
    // {-0.1, 0, 0.5, 1, 1.1}.

    #[test]
    fn negative_value_clamps_to_empty() {
        assert_eq!(gauge(-0.1).current(), 0.0);
        assert_eq!(drawn(-0.1).pixels(), drawn(0.0).pixels());
    }

    #[test]
    fn zero_value_draws_no_fill() {
        let s = drawn(0.0);
        // Border only: inner region stays at the background.
        assert_eq!(s.pixel(7, 12).unwrap().a, 0);
        assert!(s.pixel(2, 2).unwrap().a > 0);
    }

    #[test]
    fn half_value_fills_bottom_half_only() {
        let s = drawn(0.5);
        // Inner rect spans y 3..21; the bottom half (y >= 12) is filled.
        assert_eq!(s.pixel(7, 15).unwrap(), FILL8);
        assert_eq!(s.pixel(7, 8).unwrap().a, 0);
    }

    #[test]
    fn full_value_fills_the_whole_inner_height() {
        let s = drawn(1.0);
        assert_eq!(s.pixel(7, 3).unwrap(), FILL8);
        assert_eq!(s.pixel(7, 20).unwrap(), FILL8);
    }

    #[test]
    fn overshoot_clamps_to_full() {
        assert_eq!(gauge(1.1).current(), 1.0);
        assert_eq!(drawn(1.1).pixels(), drawn(1.0).pixels());
    }

    #[test]
    fn nan_value_clamps_to_empty() {
        assert_eq!(gauge(f32::NAN).current(), 0.0);
    }

    #[test]
    fn zero_fill_is_pixel_identical_to_unset() {
        let unset = {
            let mut s = Surface::new(16, 26, Color::transparent());
            HistogramOverlay::new(Vec2::new(2.0, 2.0), 10.0, 20.0)
                .fill_color(FILL)
                .draw(&mut s)
                .unwrap();
            s
        };
        assert_eq!(drawn(0.0).pixels(), unset.pixels());
    }
}
