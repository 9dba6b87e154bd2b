use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use super::Renderable;

/// One element of a scene: either a built-in renderable or an external value
/// awaiting conversion through the registry.
pub enum SceneElement {
    Builtin(Renderable),
    External {
        value: Box<dyn Any + Send + Sync>,
        /// Captured at push time; `dyn Any` alone cannot name its type.
        type_name: &'static str,
    },
}

impl SceneElement {
    pub fn external<T: Any + Send + Sync>(value: T) -> Self {
        SceneElement::External {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SceneElement::Builtin(_) => "Renderable",
            SceneElement::External { type_name, .. } => *type_name,
        }
    }

    /// True for elements that need registry conversion.
    pub fn is_external(&self) -> bool {
        matches!(self, SceneElement::External { .. })
    }
}

impl fmt::Debug for SceneElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneElement::Builtin(r) => f.debug_tuple("Builtin").field(r).finish(),
            SceneElement::External { type_name, .. } => {
                f.debug_struct("External").field("type_name", type_name).finish()
            }
        }
    }
}

type ConvertFn = Box<dyn Fn(&(dyn Any + Send + Sync)) -> Renderable + Send + Sync>;

/// Open extension table mapping external types to conversion functions.
///
/// Built-in [`Renderable`] variants are always renderable; everything else
/// becomes renderable by registering a converter for its type. Registration
/// is a one-time setup step (`&mut self`); at render time the table is only
/// read, so a populated registry can be shared across threads.
#[derive(Default)]
pub struct RenderableRegistry {
    converters: HashMap<TypeId, ConvertFn>,
}

impl RenderableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `convert` for scene elements of type `T`.
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register<T, F>(&mut self, convert: F)
    where
        T: Any + Send + Sync,
        F: Fn(&T) -> Renderable + Send + Sync + 'static,
    {
        self.converters.insert(
            TypeId::of::<T>(),
            Box::new(move |any| {
                let value = any
                    .downcast_ref::<T>()
                    .expect("converter table is keyed by TypeId, downcast cannot fail");
                convert(value)
            }),
        );
    }

    /// True when a converter for `T` is registered.
    pub fn is_registered<T: Any>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    /// True when `element` is a built-in renderable or its type has a
    /// registered converter.
    pub fn is_renderable(&self, element: &SceneElement) -> bool {
        match element {
            SceneElement::Builtin(_) => true,
            SceneElement::External { value, .. } => {
                self.converters.contains_key(&(**value).type_id())
            }
        }
    }

    /// Converts `element` to its drawable form.
    pub fn resolve(&self, element: &SceneElement) -> Result<Renderable, UnrenderableType> {
        match element {
            SceneElement::Builtin(renderable) => Ok(renderable.clone()),
            SceneElement::External { value, type_name } => {
                let convert = self
                    .converters
                    .get(&(**value).type_id())
                    .ok_or_else(|| UnrenderableType { type_name: type_name.to_string() })?;
                Ok(convert(value.as_ref()))
            }
        }
    }
}

/// A scene element's type is neither a built-in renderable nor registered
/// for conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrenderableType {
    pub type_name: String,
}

impl fmt::Display for UnrenderableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type `{}` is not renderable and has no registered converter", self.type_name)
    }
}

impl std::error::Error for UnrenderableType {}
