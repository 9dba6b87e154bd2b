//! Scene content: built-in renderables, the open conversion registry, and
//! the ordered element container.

mod registry;
mod renderable;

pub use registry::{RenderableRegistry, SceneElement, UnrenderableType};
pub use renderable::{ArrowCar, InvalidRenderable, Renderable, VehicleId, find_car};

use std::any::Any;

/// Ordered collection of scene elements for one frame.
///
/// Insertion order is draw order: later elements are drawn on top of earlier
/// ones. Elements are per-frame value descriptors; a scene is built from
/// simulation state, rendered once, and discarded.
#[derive(Default)]
pub struct Scene {
    elements: Vec<SceneElement>,
}

impl Scene {
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Appends a built-in renderable.
    pub fn push(&mut self, renderable: impl Into<Renderable>) {
        self.elements.push(SceneElement::Builtin(renderable.into()));
    }

    /// Appends an external value to be converted through the registry at
    /// render time.
    pub fn push_external<T: Any + Send + Sync>(&mut self, value: T) {
        self.elements.push(SceneElement::external(value));
    }

    #[inline]
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<Renderable> for Scene {
    fn from_iter<I: IntoIterator<Item = Renderable>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(SceneElement::Builtin).collect(),
        }
    }
}
