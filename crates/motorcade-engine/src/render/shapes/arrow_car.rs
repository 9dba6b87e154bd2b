use crate::coords::{Transform2D, Vec2};
use crate::paint::palette;
use crate::raster::{self, DrawError, Surface};
use crate::scene::ArrowCar;
use crate::text::{FontId, FontSystem};

/// Corner rounding as a fraction of the body width.
const CORNER_ROUND: f32 = 0.2;
/// Arrow shaft thickness as a fraction of the body width.
const SHAFT_THICKNESS: f32 = 0.12;
/// Arrowhead half-width as a fraction of the body width.
const HEAD_HALF_WIDTH: f32 = 0.28;
/// Label height as a fraction of the body width.
const LABEL_SCALE: f32 = 0.55;
/// Labels smaller than this many pixels are unreadable and skipped.
const MIN_LABEL_PX: f32 = 5.0;

/// Draws the car body, its heading arrow, and the optional centered label.
pub(crate) fn draw(
    surface: &mut Surface,
    car: &ArrowCar,
    camera: Transform2D,
    fonts: &FontSystem,
    label_font: Option<FontId>,
) -> Result<(), DrawError> {
    let ppu = camera.pixels_per_unit();
    let center = camera.apply(car.pos);
    // Heading direction in pixel space; the y-flip lives in the transform.
    let axis = (camera.apply(car.pos + Vec2::from_angle(car.angle)) - center).normalized();

    let half_len = car.length * 0.5 * ppu;
    let half_wid = car.width * 0.5 * ppu;

    raster::fill_oriented_rect(
        surface,
        center,
        axis,
        half_len,
        half_wid,
        CORNER_ROUND * car.width * ppu,
        car.color,
    )?;

    draw_arrow(surface, center, axis, half_len, car.width * ppu)?;

    if let (Some(text), Some(font)) = (car.text.as_deref(), label_font) {
        let size = LABEL_SCALE * car.width * ppu;
        if size >= MIN_LABEL_PX {
            let extent = fonts.measure_text(text, font, size);
            fonts.draw_text(
                surface,
                text,
                font,
                size,
                palette::CAR_ARROW,
                center - extent * 0.5,
            )?;
        }
    }
    Ok(())
}

/// Forward arrow from the body center to the front edge.
fn draw_arrow(
    surface: &mut Surface,
    center: Vec2,
    axis: Vec2,
    half_len: f32,
    width_px: f32,
) -> Result<(), DrawError> {
    let head_len = (HEAD_HALF_WIDTH * 2.0 * width_px).min(half_len * 0.5);
    let shaft_len = half_len - head_len;
    if shaft_len > 0.0 {
        raster::fill_oriented_rect(
            surface,
            center + axis * (shaft_len * 0.5),
            axis,
            shaft_len * 0.5,
            SHAFT_THICKNESS * 0.5 * width_px,
            0.0,
            palette::CAR_ARROW,
        )?;
    }

    let tip = center + axis * half_len;
    let base = center + axis * shaft_len;
    let side = axis.perp() * (HEAD_HALF_WIDTH * width_px);
    raster::fill_convex_polygon(surface, &[tip, base + side, base - side], palette::CAR_ARROW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::raster::Rgba8;

    fn render_one(car: ArrowCar) -> Surface {
        let mut surface = Surface::new(64, 64, Color::transparent());
        let camera = Transform2D::centered_on(Vec2::zero(), Vec2::new(32.0, 32.0), 8.0);
        draw(&mut surface, &car, camera, &FontSystem::new(), None).unwrap();
        surface
    }

    #[test]
    fn body_covers_the_center() {
        let s = render_one(ArrowCar::new(Vec2::zero()).color(Color::opaque(1.0, 0.0, 0.0)));
        // The center pixel shows the arrow shaft, just off-center shows body.
        let body = s.pixel(32, 36).unwrap();
        assert_eq!(body, Rgba8 { r: 255, g: 0, b: 0, a: 255 });
    }

    #[test]
    fn arrow_points_forward() {
        let s = render_one(ArrowCar::new(Vec2::zero()).length(4.0).width(2.0));
        // Heading +x: shaft pixels sit right of center on the mid row.
        let shaft = s.pixel(36, 32).unwrap();
        let arrow = Rgba8::from_color(palette::CAR_ARROW);
        assert_eq!(shaft, arrow);
        // Nothing left of the rear edge.
        assert_eq!(s.pixel(10, 32).unwrap().a, 0);
    }

    #[test]
    fn rotated_car_stays_centered() {
        let s = render_one(ArrowCar::new(Vec2::zero()).angle(1.1));
        assert!(s.pixel(32, 33).unwrap().a > 0);
    }

    #[test]
    fn missing_label_font_skips_text_quietly() {
        // Would panic inside draw_text if label handling were wrong.
        let s = render_one(ArrowCar::new(Vec2::zero()).text("7"));
        assert!(s.pixel(32, 36).unwrap().a > 0);
    }
}
