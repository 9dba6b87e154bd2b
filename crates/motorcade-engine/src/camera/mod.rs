//! Cameras: world-to-surface transform computation.
//!
//! A camera is pure state plus a pure function of the scene; nothing here
//! mutates or stores per-frame data, so repeated calls with identical inputs
//! return bit-identical transforms.

use crate::coords::{Transform2D, Vec2, Viewport};
use crate::scene::Renderable;

/// Smallest accepted zoom factor; zoom is clamped here to stay positive.
const MIN_ZOOM: f32 = 1e-6;

/// Camera centered over all vehicles in the scene, recomputed every frame.
///
/// Holds only the zoom factor; the framed region is derived from scene
/// content on each call, so there is no stale target to chase when vehicles
/// enter or leave.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneFollowCamera {
    zoom: f32,
}

impl SceneFollowCamera {
    /// `zoom > 1` magnifies, `zoom < 1` shrinks. Clamped to stay positive.
    pub fn new(zoom: f32) -> Self {
        let zoom = if zoom.is_finite() { zoom.max(MIN_ZOOM) } else { 1.0 };
        Self { zoom }
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

impl Default for SceneFollowCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Viewpoint for one render call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Camera {
    /// Fixed view: world origin at the surface center, `zoom` pixels per
    /// world unit. The default camera is `Static { zoom: 1.0 }`.
    Static { zoom: f32 },
    /// Auto-framing view over the whole scene.
    SceneFollow(SceneFollowCamera),
}

impl Camera {
    /// Convenience for the auto-framing variant.
    pub fn scene_follow(zoom: f32) -> Self {
        Camera::SceneFollow(SceneFollowCamera::new(zoom))
    }

    /// Computes the world-to-surface transform for the resolved scene.
    ///
    /// `renderables` is the scene after registry conversion; overlays are
    /// not part of the framing. `margin_fraction` widens the followed
    /// bounding box by that fraction of its larger dimension.
    ///
    /// Empty scene: origin-centered at the camera's zoom, never an error.
    pub fn transform_for(
        &self,
        renderables: &[Renderable],
        viewport: Viewport,
        margin_fraction: f32,
    ) -> Transform2D {
        match *self {
            Camera::Static { zoom } => {
                let ppu = if zoom.is_finite() { zoom.max(MIN_ZOOM) } else { 1.0 };
                Transform2D::centered_on(Vec2::zero(), viewport.center(), ppu)
            }
            Camera::SceneFollow(follow) => {
                follow_transform(follow.zoom, renderables, viewport, margin_fraction)
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::Static { zoom: 1.0 }
    }
}

fn follow_transform(
    zoom: f32,
    renderables: &[Renderable],
    viewport: Viewport,
    margin_fraction: f32,
) -> Transform2D {
    let mut bounds: Option<crate::coords::Rect> = None;
    for r in renderables {
        let b = r.bounds();
        bounds = Some(match bounds {
            None => b,
            Some(acc) => acc.union(b),
        });
    }

    let Some(world) = bounds else {
        return Transform2D::centered_on(Vec2::zero(), viewport.center(), zoom);
    };

    let margin = if margin_fraction.is_finite() {
        margin_fraction.max(0.0) * world.size.x.max(world.size.y)
    } else {
        0.0
    };
    let framed = world.expanded(margin);

    // Degenerate boxes still frame as a small neighborhood.
    let fit_w = viewport.width / framed.size.x.max(1e-3);
    let fit_h = viewport.height / framed.size.y.max(1e-3);
    let ppu = fit_w.min(fit_h) * zoom;

    Transform2D::centered_on(framed.center(), viewport.center(), ppu)
}
