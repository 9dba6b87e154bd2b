use std::fmt;

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, palette};

/// Identifier overlays use to reference a vehicle in the current scene.
///
/// Always resolved by lookup against the frame being rendered, never stored
/// as a pointer; the referenced vehicle only lives for that frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle #{}", self.0)
    }
}

/// A rectangular car with a heading arrow, the built-in vehicle renderable.
///
/// World units are meters, `angle` is the heading in radians
/// (counter-clockwise from +x). Defaults are a typical sedan footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowCar {
    pub pos: Vec2,
    pub angle: f32,
    pub length: f32,
    pub width: f32,
    pub color: Color,
    /// Label drawn centered on the body, if a label font is configured.
    pub text: Option<String>,
    /// Identity for overlay back-references; `None` means anonymous.
    pub id: Option<VehicleId>,
}

impl ArrowCar {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            length: 4.8,
            width: 1.8,
            color: palette::CAR_OTHER,
            text: None,
            id: None,
        }
    }

    pub fn angle(mut self, v: f32) -> Self { self.angle = v; self }
    pub fn length(mut self, v: f32) -> Self { self.length = v; self }
    pub fn width(mut self, v: f32) -> Self { self.width = v; self }
    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn text(mut self, v: impl Into<String>) -> Self { self.text = Some(v.into()); self }
    pub fn id(mut self, v: VehicleId) -> Self { self.id = Some(v); self }

    /// Body corners in world space: front-left, front-right, rear-right,
    /// rear-left, rotated by the heading.
    pub fn corners(&self) -> [Vec2; 4] {
        let hl = self.length * 0.5;
        let hw = self.width * 0.5;
        [
            self.pos + Vec2::new(hl, hw).rotated(self.angle),
            self.pos + Vec2::new(hl, -hw).rotated(self.angle),
            self.pos + Vec2::new(-hl, -hw).rotated(self.angle),
            self.pos + Vec2::new(-hl, hw).rotated(self.angle),
        ]
    }

    /// World-space axis-aligned bounds of the body.
    pub fn bounds(&self) -> Rect {
        // corners() is non-empty by construction.
        Rect::bounding(&self.corners()).expect("four corners always bound")
    }
}

/// Closed set of built-in drawable kinds.
///
/// External scene types join through [`RenderableRegistry`] conversion
/// rather than new variants; add a variant only when the drawing core itself
/// grows a new primitive.
///
/// [`RenderableRegistry`]: super::RenderableRegistry
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    ArrowCar(ArrowCar),
}

impl Renderable {
    /// World position, used for camera framing.
    pub fn position(&self) -> Vec2 {
        match self {
            Renderable::ArrowCar(car) => car.pos,
        }
    }

    /// World-space bounds, used for camera framing.
    pub fn bounds(&self) -> Rect {
        match self {
            Renderable::ArrowCar(car) => car.bounds(),
        }
    }

    /// Checks the descriptor invariants before any drawing happens.
    pub fn validate(&self) -> Result<(), InvalidRenderable> {
        match self {
            Renderable::ArrowCar(car) => {
                if !(car.length > 0.0 && car.length.is_finite()) {
                    return Err(InvalidRenderable::new(format!(
                        "car length must be positive and finite, got {}",
                        car.length
                    )));
                }
                if !(car.width > 0.0 && car.width.is_finite()) {
                    return Err(InvalidRenderable::new(format!(
                        "car width must be positive and finite, got {}",
                        car.width
                    )));
                }
                if !car.angle.is_finite() {
                    return Err(InvalidRenderable::new("car heading angle must be finite"));
                }
                if !car.pos.is_finite() {
                    return Err(InvalidRenderable::new("car position must be finite"));
                }
                Ok(())
            }
        }
    }
}

impl From<ArrowCar> for Renderable {
    fn from(car: ArrowCar) -> Self {
        Renderable::ArrowCar(car)
    }
}

/// First renderable carrying `id`, in draw order.
pub fn find_car(renderables: &[Renderable], id: VehicleId) -> Option<&ArrowCar> {
    renderables.iter().find_map(|r| match r {
        Renderable::ArrowCar(car) if car.id == Some(id) => Some(car),
        _ => None,
    })
}

/// A renderable descriptor violated its invariants (non-positive dimensions,
/// non-finite coordinates).
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRenderable {
    pub reason: String,
}

impl InvalidRenderable {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl fmt::Display for InvalidRenderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid renderable: {}", self.reason)
    }
}

impl std::error::Error for InvalidRenderable {}
