use std::{fmt, ops::Deref, sync::Arc};

use super::{BeanEntry, Registry};

/// Clonable, type-erased registry reference.
///
/// This is the value the bridge stores in the shared context, so jobs can
/// read it back with `SharedContext::get::<RegistryHandle>`.
#[derive(Clone)]
pub struct RegistryHandle(Arc<dyn Registry>);

impl RegistryHandle {
    pub fn new<R>(registry: R) -> Self
    where
        R: Registry + 'static,
    {
        Self(Arc::new(registry))
    }

    /// Returns `true` if both handles point at the same registry instance.
    pub fn same_as(&self, other: &RegistryHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for RegistryHandle {
    type Target = dyn Registry;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl Registry for RegistryHandle {
    fn lookup(&self, name: &str) -> Option<BeanEntry> {
        self.0.lookup(name)
    }

    fn names(&self) -> Vec<String> {
        self.0.names()
    }

    fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl fmt::Debug for RegistryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryHandle")
            .field("beans", &self.0.names())
            .finish()
    }
}
