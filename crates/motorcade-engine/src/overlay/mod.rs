//! Overlays: annotations composited after the base scene.
//!
//! Overlays never participate in camera framing and always draw on top of
//! every base-scene renderable, in overlay-list order. A broken overlay is
//! skipped with a warning; it never discards the rest of the frame.

mod blinker;
mod histogram;

pub use blinker::BlinkerOverlay;
pub use histogram::HistogramOverlay;

use std::fmt;

use crate::coords::Transform2D;
use crate::raster::{DrawError, Surface};
use crate::scene::{Renderable, VehicleId, find_car};

/// Annotation drawn over the base scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Turn-signal dot anchored to a vehicle's front corner (world space).
    Blinker(BlinkerOverlay),
    /// Bar gauge anchored in surface space.
    Histogram(HistogramOverlay),
}

impl From<BlinkerOverlay> for Overlay {
    fn from(o: BlinkerOverlay) -> Self {
        Overlay::Blinker(o)
    }
}

impl From<HistogramOverlay> for Overlay {
    fn from(o: HistogramOverlay) -> Self {
        Overlay::Histogram(o)
    }
}

/// Recoverable per-overlay failure, reported alongside the finished surface.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RenderWarning {
    /// An overlay referenced a vehicle id absent from the rendered scene.
    DanglingReference { vehicle: VehicleId },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::DanglingReference { vehicle } => {
                write!(f, "overlay references {vehicle}, which is not in the scene")
            }
        }
    }
}

/// Draws `overlays` in list order over the finished base scene.
///
/// World-anchored overlays resolve their anchors through `camera`;
/// surface-anchored overlays ignore it. Dangling vehicle references append
/// a [`RenderWarning`] and skip that overlay only.
pub fn compose_overlays(
    surface: &mut Surface,
    overlays: &[Overlay],
    renderables: &[Renderable],
    camera: Transform2D,
    warnings: &mut Vec<RenderWarning>,
) -> Result<(), DrawError> {
    for overlay in overlays {
        match overlay {
            Overlay::Blinker(blinker) => {
                let Some(car) = find_car(renderables, blinker.vehicle) else {
                    log::warn!("skipping blinker overlay: {} not in scene", blinker.vehicle);
                    warnings.push(RenderWarning::DanglingReference { vehicle: blinker.vehicle });
                    continue;
                };
                blinker.draw(surface, car, camera)?;
            }
            Overlay::Histogram(histogram) => histogram.draw(surface)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::ArrowCar;

    fn scene_with_car(id: u32) -> Vec<Renderable> {
        vec![ArrowCar::new(Vec2::zero()).id(VehicleId(id)).into()]
    }

    #[test]
    fn dangling_reference_warns_and_continues() {
        let mut surface = Surface::new(64, 64, Color::transparent());
        let overlays = vec![
            Overlay::from(BlinkerOverlay::new(VehicleId(99))),
            Overlay::from(
                HistogramOverlay::new(Vec2::new(4.0, 4.0), 10.0, 20.0).value(1.0),
            ),
        ];
        let mut warnings = Vec::new();

        compose_overlays(
            &mut surface,
            &overlays,
            &scene_with_car(1),
            Transform2D::identity(),
            &mut warnings,
        )
        .unwrap();

        assert_eq!(warnings, vec![RenderWarning::DanglingReference { vehicle: VehicleId(99) }]);
        // The histogram after the dangling blinker still drew.
        assert!(surface.pixel(8, 20).unwrap().a > 0);
    }

    #[test]
    fn resolved_blinker_produces_no_warning() {
        let mut surface = Surface::new(64, 64, Color::transparent());
        let transform = Transform2D::centered_on(Vec2::zero(), Vec2::new(32.0, 32.0), 4.0);
        let overlays = vec![Overlay::from(BlinkerOverlay::new(VehicleId(1)))];
        let mut warnings = Vec::new();

        compose_overlays(&mut surface, &overlays, &scene_with_car(1), transform, &mut warnings)
            .unwrap();

        assert!(warnings.is_empty());
    }

    #[test]
    fn overlays_draw_in_list_order() {
        let mut surface = Surface::new(32, 32, Color::transparent());
        let red = HistogramOverlay::new(Vec2::zero(), 32.0, 32.0)
            .value(1.0)
            .fill_color(Color::opaque(1.0, 0.0, 0.0))
            .border_width(0.0);
        let blue = HistogramOverlay::new(Vec2::zero(), 32.0, 32.0)
            .value(1.0)
            .fill_color(Color::opaque(0.0, 0.0, 1.0))
            .border_width(0.0);
        let mut warnings = Vec::new();

        compose_overlays(
            &mut surface,
            &[red.into(), blue.into()],
            &[],
            Transform2D::identity(),
            &mut warnings,
        )
        .unwrap();

        // Later overlay wins at the shared pixels.
        assert_eq!(surface.pixel(16, 16).unwrap().b, 255);
        assert_eq!(surface.pixel(16, 16).unwrap().r, 0);
    }
}
