//! Named-bean registry consulted by jobs.
//!
//! The registry is read-only once built. Jobs reach it either through the
//! scheduler's shared context (see [`crate::bridge`]) or by receiving it
//! directly at construction time.
mod error;
pub use error::{RegistryError, ResolveError};

mod handle;
pub use handle::RegistryHandle;

mod memory;
pub use memory::StaticRegistry;

use std::{
    any::{Any, type_name},
    fmt,
    sync::Arc,
};

/// A type-erased bean together with the name of its concrete type.
#[derive(Clone)]
pub struct BeanEntry {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl BeanEntry {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<T>(value: Arc<T>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Concrete type name recorded at registration.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Downcast to `T`, handing the entry back on mismatch.
    pub fn downcast<T>(self) -> Result<Arc<T>, Self>
    where
        T: Any + Send + Sync,
    {
        let type_name = self.type_name;
        self.value
            .downcast::<T>()
            .map_err(|value| Self { value, type_name })
    }
}

impl fmt::Debug for BeanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanEntry")
            .field("type", &self.type_name)
            .finish()
    }
}

/// Name-to-instance lookup table.
///
/// Implementations must be safe for concurrent reads; jobs never mutate them.
pub trait Registry: Send + Sync {
    /// Return the bean registered under `name`, if any.
    fn lookup(&self, name: &str) -> Option<BeanEntry>;

    /// All registered names, sorted.
    fn names(&self) -> Vec<String>;

    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// Typed resolution on top of [`Registry::lookup`].
///
/// Blanket-implemented for every registry, including `dyn Registry`.
pub trait RegistryExt: Registry {
    /// Resolve `name` as an instance of `T`.
    ///
    /// Fails with [`ResolveError::NotFound`] when the name is not registered
    /// and with [`ResolveError::TypeMismatch`] when the bean has another type.
    fn resolve<T>(&self, name: &str) -> Result<Arc<T>, ResolveError>
    where
        T: Any + Send + Sync,
    {
        let entry = self.lookup(name).ok_or_else(|| ResolveError::NotFound {
            name: name.to_string(),
        })?;
        entry
            .downcast::<T>()
            .map_err(|entry| ResolveError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
                actual: entry.type_name(),
            })
    }
}

impl<R: Registry + ?Sized> RegistryExt for R {}
