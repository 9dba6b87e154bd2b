use super::Vec2;

/// Mapping from world coordinates (y up) to surface pixels (y down).
///
/// Per-axis scale plus translation. Cameras produce a negative `scale.y` so
/// that world-up maps to screen-up; the identity transform leaves surface
/// coordinates untouched, which is what screen-anchored overlays use.
///
/// Invariant: the axis scales have equal magnitude (uniform zoom), so
/// [`pixels_per_unit`](Transform2D::pixels_per_unit) is well defined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub scale: Vec2,
    pub offset: Vec2,
}

impl Transform2D {
    #[inline]
    pub const fn new(scale: Vec2, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
            offset: Vec2::zero(),
        }
    }

    /// World-to-pixel transform with `ppu` pixels per world unit, placing
    /// world point `center` at pixel `pixel_center`, with the y-axis flipped.
    #[inline]
    pub fn centered_on(center: Vec2, pixel_center: Vec2, ppu: f32) -> Self {
        Self {
            scale: Vec2::new(ppu, -ppu),
            offset: Vec2::new(
                pixel_center.x - center.x * ppu,
                pixel_center.y + center.y * ppu,
            ),
        }
    }

    /// Maps a world point to surface pixels.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.scale.x + self.offset.x,
            p.y * self.scale.y + self.offset.y,
        )
    }

    /// Magnitude of the uniform zoom, in pixels per world unit.
    #[inline]
    pub fn pixels_per_unit(self) -> f32 {
        self.scale.x.abs()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.scale.is_finite() && self.offset.is_finite()
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
