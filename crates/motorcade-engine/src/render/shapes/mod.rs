//! Per-shape drawing of resolved renderables.
//!
//! Extending the renderer:
//! - add a variant to [`Renderable`](crate::scene::Renderable)
//! - add a matching shape module here
//! - dispatch it from [`draw_renderable`]

pub(crate) mod arrow_car;

use crate::coords::Transform2D;
use crate::raster::{DrawError, Surface};
use crate::scene::Renderable;
use crate::text::{FontId, FontSystem};

/// Draws one resolved renderable under the camera transform.
pub(crate) fn draw_renderable(
    surface: &mut Surface,
    renderable: &Renderable,
    camera: Transform2D,
    fonts: &FontSystem,
    label_font: Option<FontId>,
) -> Result<(), DrawError> {
    match renderable {
        Renderable::ArrowCar(car) => arrow_car::draw(surface, car, camera, fonts, label_font),
    }
}
