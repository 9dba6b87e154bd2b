use crate::camera::Camera;
use crate::coords::Viewport;
use crate::overlay::{Overlay, RenderWarning, compose_overlays};
use crate::raster::Surface;
use crate::scene::{Renderable, RenderableRegistry, Scene};
use crate::text::{FontId, FontLoadError, FontSystem};

use super::shapes::draw_renderable;
use super::{RenderConfig, RenderError};

/// The finished output of one render call: the sealed surface plus any
/// recoverable diagnostics collected along the way.
#[derive(Debug)]
pub struct Frame {
    pub surface: Surface,
    pub warnings: Vec<RenderWarning>,
}

/// Orchestrates a full render pass over a scene.
///
/// Owns the conversion registry and fonts. Both are populated during a
/// one-time setup phase (`&mut self`); rendering itself borrows the
/// renderer immutably, so one configured `Renderer` can serve several
/// threads exporting independent frames in parallel.
pub struct Renderer {
    registry: RenderableRegistry,
    fonts: FontSystem,
    label_font: Option<FontId>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            registry: RenderableRegistry::new(),
            fonts: FontSystem::new(),
            label_font: None,
        }
    }

    /// Registers a conversion for external scene element type `T`.
    ///
    /// Setup phase only; must happen before rendering starts.
    pub fn register<T, F>(&mut self, convert: F)
    where
        T: std::any::Any + Send + Sync,
        F: Fn(&T) -> Renderable + Send + Sync + 'static,
    {
        self.registry.register::<T, F>(convert);
    }

    #[inline]
    pub fn registry(&self) -> &RenderableRegistry {
        &self.registry
    }

    /// Loads the font used for vehicle labels.
    pub fn load_label_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let id = self.fonts.load_font(bytes)?;
        self.label_font = Some(id);
        Ok(id)
    }

    /// Renders `scene` with the default camera, no overlays, and the
    /// default configuration.
    pub fn render_with_defaults(&self, scene: &Scene) -> Result<Frame, RenderError> {
        self.render(scene, &Camera::default(), &[], &RenderConfig::default())
    }

    /// Renders `scene` onto a fresh surface and returns it.
    ///
    /// Fails fast before any drawing if the config is unusable or an
    /// element cannot be resolved to a renderable; per-overlay problems are
    /// collected in [`Frame::warnings`] instead of failing the call.
    pub fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        overlays: &[Overlay],
        config: &RenderConfig,
    ) -> Result<Frame, RenderError> {
        config.validate()?;

        // ── resolve ───────────────────────────────────────────────────────
        let mut resolved = Vec::with_capacity(scene.len());
        for (index, element) in scene.elements().iter().enumerate() {
            let renderable = self
                .registry
                .resolve(element)
                .map_err(|e| RenderError::UnrenderableType { type_name: e.type_name, index })?;
            renderable
                .validate()
                .map_err(|source| RenderError::InvalidRenderable { index, source })?;
            resolved.push(renderable);
        }

        // ── camera ────────────────────────────────────────────────────────
        let viewport = Viewport::from_pixels(config.surface_width, config.surface_height);
        let transform = camera.transform_for(&resolved, viewport, config.margin_fraction);

        log::debug!(
            "rendering {} renderables, {} overlays at {}x{}",
            resolved.len(),
            overlays.len(),
            config.surface_width,
            config.surface_height
        );

        // ── base pass ─────────────────────────────────────────────────────
        let mut surface =
            Surface::new(config.surface_width, config.surface_height, config.background_color);
        for renderable in &resolved {
            draw_renderable(&mut surface, renderable, transform, &self.fonts, self.label_font)?;
        }

        // ── overlay pass ──────────────────────────────────────────────────
        let mut warnings = Vec::new();
        compose_overlays(&mut surface, overlays, &resolved, transform, &mut warnings)?;

        surface.finish();
        Ok(Frame { surface, warnings })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::overlay::BlinkerOverlay;
    use crate::paint::Color;
    use crate::raster::Rgba8;
    use crate::scene::{ArrowCar, VehicleId};

    fn small_config() -> RenderConfig {
        RenderConfig::new(64, 64).background_color(Color::opaque(1.0, 1.0, 1.0))
    }

    fn zoomed_camera() -> Camera {
        Camera::Static { zoom: 8.0 }
    }

    // ── scenes of builtins ────────────────────────────────────────────────

    #[test]
    fn builtin_scene_always_renders() {
        let scene: Scene = (0..10)
            .map(|i| ArrowCar::new(Vec2::new(i as f32 * 6.0, 0.0)).into())
            .collect();
        let frame = Renderer::new().render_with_defaults(&scene).unwrap();
        assert!(frame.warnings.is_empty());
        assert!(frame.surface.is_finished());
    }

    // ── conversion transparency ───────────────────────────────────────────

    struct Truck {
        x: f32,
        y: f32,
    }

    fn truck_car(t: &Truck) -> Renderable {
        ArrowCar::new(Vec2::new(t.x, t.y))
            .length(7.5)
            .width(2.5)
            .color(Color::opaque(0.6, 0.3, 0.1))
            .into()
    }

    #[test]
    fn converted_external_matches_preconverted() {
        let mut renderer = Renderer::new();
        renderer.register::<Truck, _>(truck_car);

        let mut external = Scene::new();
        external.push_external(Truck { x: 1.0, y: 0.5 });

        let mut preconverted = Scene::new();
        preconverted.push(truck_car(&Truck { x: 1.0, y: 0.5 }));

        let a = renderer
            .render(&external, &zoomed_camera(), &[], &small_config())
            .unwrap();
        let b = renderer
            .render(&preconverted, &zoomed_camera(), &[], &small_config())
            .unwrap();
        assert_eq!(a.surface.pixels(), b.surface.pixels());
    }

    #[test]
    fn unregistered_external_fails_fast_naming_the_type() {
        struct Pedestrian;
        let mut scene = Scene::new();
        scene.push(ArrowCar::new(Vec2::zero()));
        scene.push_external(Pedestrian);

        let err = Renderer::new().render_with_defaults(&scene).unwrap_err();
        match err {
            RenderError::UnrenderableType { type_name, index } => {
                assert!(type_name.contains("Pedestrian"));
                assert_eq!(index, 1);
            }
            other => panic!("expected UnrenderableType, got {other:?}"),
        }
    }

    // ── empty scene ───────────────────────────────────────────────────────

    #[test]
    fn empty_scene_renders_background_only() {
        let frame = Renderer::new().render_with_defaults(&Scene::new()).unwrap();
        let config = RenderConfig::default();
        assert_eq!(frame.surface.width(), config.surface_width);
        assert_eq!(frame.surface.height(), config.surface_height);

        let bg = Rgba8::from_color(config.background_color);
        assert!(frame.surface.pixels().iter().all(|p| *p == bg));
        assert!(frame.warnings.is_empty());
    }

    // ── draw order ────────────────────────────────────────────────────────

    #[test]
    fn later_element_draws_over_earlier() {
        let mut scene = Scene::new();
        scene.push(ArrowCar::new(Vec2::zero()).color(Color::opaque(1.0, 0.0, 0.0)));
        scene.push(ArrowCar::new(Vec2::zero()).color(Color::opaque(0.0, 0.0, 1.0)));

        let frame = Renderer::new()
            .render(&scene, &zoomed_camera(), &[], &small_config())
            .unwrap();
        // Sample inside the body but off the arrow shaft.
        let p = frame.surface.pixel(32, 36).unwrap();
        assert_eq!(p, Rgba8 { r: 0, g: 0, b: 255, a: 255 });
    }

    // ── overlay diagnostics ───────────────────────────────────────────────

    #[test]
    fn dangling_blinker_reports_one_warning_and_renders_rest() {
        let mut scene = Scene::new();
        scene.push(
            ArrowCar::new(Vec2::zero())
                .id(VehicleId(1))
                .color(Color::opaque(1.0, 0.0, 0.0)),
        );
        let overlays = vec![
            Overlay::from(BlinkerOverlay::new(VehicleId(42))),
            Overlay::from(BlinkerOverlay::new(VehicleId(1))),
        ];

        let frame = Renderer::new()
            .render(&scene, &zoomed_camera(), &overlays, &small_config())
            .unwrap();

        assert_eq!(
            frame.warnings,
            vec![RenderWarning::DanglingReference { vehicle: VehicleId(42) }]
        );
        // Base scene still drew.
        assert_eq!(frame.surface.pixel(32, 36).unwrap().r, 255);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn invalid_config_fails_before_drawing() {
        let err = Renderer::new()
            .render(&Scene::new(), &Camera::default(), &[], &RenderConfig::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig { .. }));
    }

    #[test]
    fn invalid_car_fails_with_its_index() {
        let mut scene = Scene::new();
        scene.push(ArrowCar::new(Vec2::zero()));
        scene.push(ArrowCar::new(Vec2::zero()).length(-1.0));

        let err = Renderer::new().render_with_defaults(&scene).unwrap_err();
        assert!(matches!(err, RenderError::InvalidRenderable { index: 1, .. }));
    }

    #[test]
    fn returned_surface_is_sealed() {
        let frame = Renderer::new().render_with_defaults(&Scene::new()).unwrap();
        assert!(frame.surface.is_finished());
    }
}
