use crate::paint::{Color, palette};

use super::RenderError;

/// Per-call render options.
///
/// The defaults produce a 1000x600 frame on a light background with a 10%
/// auto-fit margin for the follow camera.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Target surface width in pixels.
    pub surface_width: u32,
    /// Target surface height in pixels.
    pub surface_height: u32,
    pub background_color: Color,
    /// Fraction of the followed bounding box's larger dimension added as
    /// padding on every side before fitting.
    pub margin_fraction: f32,
}

impl RenderConfig {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            surface_width,
            surface_height,
            ..Self::default()
        }
    }

    pub fn background_color(mut self, v: Color) -> Self { self.background_color = v; self }
    pub fn margin_fraction(mut self, v: f32) -> Self { self.margin_fraction = v; self }

    /// Rejects configurations no surface can be allocated for.
    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(RenderError::InvalidConfig {
                reason: format!(
                    "surface dimensions must be positive, got {}x{}",
                    self.surface_width, self.surface_height
                ),
            });
        }
        if !self.margin_fraction.is_finite() || self.margin_fraction < 0.0 {
            return Err(RenderError::InvalidConfig {
                reason: format!("margin fraction must be finite and >= 0, got {}", self.margin_fraction),
            });
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            surface_width: 1000,
            surface_height: 600,
            background_color: palette::BACKGROUND,
            margin_fraction: 0.1,
        }
    }
}
