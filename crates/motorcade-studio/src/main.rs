//! Demo exporter: renders a short highway sequence to numbered PNGs.
//!
//! Owns encoding and disk IO; the engine only ever hands back pixel
//! surfaces.

use anyhow::{Context, Result};

use motorcade_engine::camera::Camera;
use motorcade_engine::coords::Vec2;
use motorcade_engine::logging::{LoggingConfig, init_logging};
use motorcade_engine::overlay::{BlinkerOverlay, HistogramOverlay, Overlay};
use motorcade_engine::paint::{Color, palette};
use motorcade_engine::render::{Frame, RenderConfig, Renderer};
use motorcade_engine::scene::{ArrowCar, Scene, VehicleId};

const FRAMES: u32 = 60;
const DT: f32 = 0.1;
const LANE_WIDTH: f32 = 3.6;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "frames".to_string());
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {out_dir}"))?;

    let mut renderer = Renderer::new();
    match load_font() {
        Some(bytes) => {
            renderer.load_label_font(&bytes).context("parsing label font")?;
        }
        None => log::warn!("no system font found, vehicle labels will be omitted"),
    }

    let camera = Camera::scene_follow(0.8);
    let config = RenderConfig::new(1280, 720);

    for frame_index in 0..FRAMES {
        let t = frame_index as f32 * DT;
        let (scene, overlays) = highway_frame(t);

        let frame = renderer
            .render(&scene, &camera, &overlays, &config)
            .with_context(|| format!("rendering frame {frame_index}"))?;
        for warning in &frame.warnings {
            log::warn!("frame {frame_index}: {warning}");
        }

        let path = format!("{out_dir}/frame_{frame_index:04}.png");
        save_png(&path, &frame).with_context(|| format!("writing {path}"))?;
    }

    println!("wrote {FRAMES} frames to {out_dir}/");
    Ok(())
}

/// Three-lane highway snapshot at time `t`: an ego car overtaking two
/// slower vehicles, signaling while it changes lanes.
fn highway_frame(t: f32) -> (Scene, Vec<Overlay>) {
    let ego_speed = 25.0;
    let slow_speed = 18.0;

    // The ego drifts one lane up between t = 1 and t = 3.
    let lane_shift = ((t - 1.0) / 2.0).clamp(0.0, 1.0);
    let changing = lane_shift > 0.0 && lane_shift < 1.0;

    let ego = ArrowCar::new(Vec2::new(ego_speed * t, LANE_WIDTH * lane_shift))
        .angle(0.25 * (core::f32::consts::PI * lane_shift).sin())
        .color(palette::CAR_EGO)
        .text("ego")
        .id(VehicleId(1));
    let lead = ArrowCar::new(Vec2::new(20.0 + slow_speed * t, 0.0))
        .text("2")
        .id(VehicleId(2));
    let oncoming = ArrowCar::new(Vec2::new(90.0 - 20.0 * t, -LANE_WIDTH))
        .angle(core::f32::consts::PI)
        .color(Color::from_srgb_u8(140, 60, 60, 255))
        .text("3")
        .id(VehicleId(3));

    let mut scene = Scene::new();
    scene.push(lead);
    scene.push(oncoming);
    scene.push(ego);

    let overlays = vec![
        Overlay::from(
            BlinkerOverlay::new(VehicleId(1))
                .on(changing)
                .right(false)
                .size(0.4),
        ),
        // Speed gauge pinned to the surface corner.
        Overlay::from(
            HistogramOverlay::new(Vec2::new(20.0, 20.0), 24.0, 120.0)
                .value(ego_speed / 40.0),
        ),
    ];

    (scene, overlays)
}

fn save_png(path: &str, frame: &Frame) -> Result<()> {
    image::save_buffer(
        path,
        frame.surface.as_bytes(),
        frame.surface.width(),
        frame.surface.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
