//! Top-level scene rendering: configuration, the renderer, and its errors.

mod config;
mod error;
mod renderer;
mod shapes;

pub use config::RenderConfig;
pub use error::RenderError;
pub use renderer::{Frame, Renderer};
