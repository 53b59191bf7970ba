//! Makes the bean registry discoverable from inside a job firing.
//!
//! The scheduler publishes a [`RegistryHandle`] into its [`SharedContext`]
//! during `start`, before the supervisor run loop exists. Jobs read it back
//! with [`registry_from_context`].
use std::any::Any;

use tracing::debug;

use crate::{
    context::{ContextError, ContextKey, SharedContext},
    registry::{Registry, RegistryHandle},
};

/// Store `value` under `key`.
///
/// Subsequent reads of `key` return `value` from any thread for as long as
/// the context lives.
pub fn publish<T>(context: &SharedContext, key: &ContextKey, value: T)
where
    T: Any + Send + Sync,
{
    context.publish(key, value);
}

/// Publish a registry handle under `key`.
pub fn publish_registry(context: &SharedContext, key: &ContextKey, registry: RegistryHandle) {
    debug!(key = %key, beans = registry.names().len(), "publishing bean registry");
    publish(context, key, registry);
}

/// Read the registry handle published under `key`.
pub fn registry_from_context(
    context: &SharedContext,
    key: &str,
) -> Result<RegistryHandle, ContextError> {
    context
        .get::<RegistryHandle>(key)
        .map(|handle| (*handle).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StaticRegistry;

    #[test]
    fn published_registry_is_the_same_instance() {
        let ctx = SharedContext::new();
        let key = ContextKey::application_context();
        let handle = RegistryHandle::new(StaticRegistry::new());

        publish_registry(&ctx, &key, handle.clone());

        let read = registry_from_context(&ctx, key.as_str()).unwrap();
        assert!(read.same_as(&handle));
    }

    #[test]
    fn missing_registry_is_a_context_error() {
        let ctx = SharedContext::new();
        let err = registry_from_context(&ctx, "applicationContext").unwrap_err();
        assert!(matches!(err, ContextError::Missing { .. }));
    }

    #[test]
    fn non_registry_value_is_a_type_mismatch() {
        let ctx = SharedContext::new();
        let key = ContextKey::application_context();
        publish(&ctx, &key, String::from("oops"));

        let err = registry_from_context(&ctx, key.as_str()).unwrap_err();
        assert!(matches!(err, ContextError::TypeMismatch { .. }));
    }
}
