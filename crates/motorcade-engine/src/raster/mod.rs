//! CPU rasterization: the owned pixel surface and the primitive drawer.
//!
//! All functions here work in surface pixel space; callers apply the active
//! camera transform before handing geometry down.

mod draw;
mod surface;

use std::fmt;

pub use draw::{
    blit_coverage, fill_circle, fill_convex_polygon, fill_oriented_rect, fill_rect, stroke_rect,
};
pub use surface::{Rgba8, Surface};

/// Error from a primitive draw call.
///
/// Draw errors indicate surface lifecycle or geometry misuse by the caller;
/// they never occur during a well-formed render pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawError {
    /// The surface was sealed with [`Surface::finish`] and is read-only.
    SurfaceFinished,
    /// Geometry contained a NaN or infinite coordinate.
    NonFiniteGeometry,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::SurfaceFinished => write!(f, "draw on a finished surface"),
            DrawError::NonFiniteGeometry => write!(f, "non-finite draw geometry"),
        }
    }
}

impl std::error::Error for DrawError {}
