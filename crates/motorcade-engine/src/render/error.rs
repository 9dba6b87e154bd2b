use std::fmt;

use crate::raster::DrawError;
use crate::scene::InvalidRenderable;

/// Fatal render failure.
///
/// All variants surface before or instead of a finished frame; recoverable
/// per-overlay problems are reported as
/// [`RenderWarning`](crate::overlay::RenderWarning)s alongside the surface
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A scene element's type is neither built-in nor registered for
    /// conversion. Reported before any drawing happens.
    UnrenderableType {
        type_name: String,
        /// Scene position of the first offending element.
        index: usize,
    },
    /// A resolved renderable violated its invariants.
    InvalidRenderable {
        index: usize,
        source: InvalidRenderable,
    },
    /// The configuration cannot produce a surface.
    InvalidConfig { reason: String },
    /// Surface lifecycle misuse during the draw pass.
    Draw(DrawError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnrenderableType { type_name, index } => {
                write!(f, "scene element {index}: type `{type_name}` is not renderable")
            }
            RenderError::InvalidRenderable { index, source } => {
                write!(f, "scene element {index}: {source}")
            }
            RenderError::InvalidConfig { reason } => write!(f, "invalid render config: {reason}"),
            RenderError::Draw(e) => write!(f, "draw failed: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::InvalidRenderable { source, .. } => Some(source),
            RenderError::Draw(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DrawError> for RenderError {
    fn from(e: DrawError) -> Self {
        RenderError::Draw(e)
    }
}
