//! Motorcade engine crate.
//!
//! CPU rendering pipeline for 2D traffic scenes: build a [`scene::Scene`]
//! of vehicles each frame, pick a [`camera::Camera`], stack
//! [`overlay::Overlay`]s on top, and a [`render::Renderer`] turns it into
//! an owned pixel [`raster::Surface`] for an external encoder or viewer.
//!
//! ```rust,ignore
//! use motorcade_engine::camera::Camera;
//! use motorcade_engine::coords::Vec2;
//! use motorcade_engine::render::{RenderConfig, Renderer};
//! use motorcade_engine::scene::{ArrowCar, Scene, VehicleId};
//!
//! let renderer = Renderer::new();
//! let mut scene = Scene::new();
//! scene.push(ArrowCar::new(Vec2::new(0.0, 0.0)).id(VehicleId(1)));
//!
//! let frame = renderer.render(
//!     &scene,
//!     &Camera::scene_follow(1.0),
//!     &[],
//!     &RenderConfig::default(),
//! )?;
//! encode_png(frame.surface.as_bytes());
//! ```

pub mod camera;
pub mod coords;
pub mod logging;
pub mod overlay;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;
pub mod text;
