use crate::coords::{Transform2D, Vec2};
use crate::paint::{Color, palette};
use crate::raster::{self, DrawError, Surface};
use crate::scene::{ArrowCar, VehicleId};

/// Turn-signal indicator: a filled circle on one front corner of a vehicle.
///
/// References its vehicle by [`VehicleId`], resolved against the scene each
/// render; the overlay holds no vehicle data of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkerOverlay {
    pub vehicle: VehicleId,
    /// Whether the signal is lit; an unlit blinker draws nothing.
    pub on: bool,
    /// Front-right corner when true, front-left otherwise.
    pub right: bool,
    pub color: Color,
    /// Dot radius in world units.
    pub size: f32,
}

impl BlinkerOverlay {
    pub fn new(vehicle: VehicleId) -> Self {
        Self {
            vehicle,
            on: true,
            right: true,
            color: palette::BLINKER,
            size: 0.5,
        }
    }

    pub fn on(mut self, v: bool) -> Self { self.on = v; self }
    pub fn right(mut self, v: bool) -> Self { self.right = v; self }
    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn size(mut self, v: f32) -> Self { self.size = v.max(0.0); self }

    /// World-space anchor on the resolved vehicle.
    pub fn anchor(&self, car: &ArrowCar) -> Vec2 {
        let lateral = if self.right { -car.width * 0.5 } else { car.width * 0.5 };
        car.pos + Vec2::new(car.length * 0.5, lateral).rotated(car.angle)
    }

    pub(crate) fn draw(
        &self,
        surface: &mut Surface,
        car: &ArrowCar,
        camera: Transform2D,
    ) -> Result<(), DrawError> {
        if !self.on {
            return Ok(());
        }
        let center = camera.apply(self.anchor(car));
        let radius = self.size * camera.pixels_per_unit();
        raster::fill_circle(surface, center, radius, self.color)
    }
}
