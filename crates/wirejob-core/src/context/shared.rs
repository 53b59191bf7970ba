use std::{
    any::{Any, type_name},
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::trace;

use super::{ContextError, ContextKey};

#[derive(Clone)]
struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

/// Process-wide key/value map owned by the scheduler.
///
/// Cloning is cheap and every clone sees the same entries. Writes go through a
/// `RwLock`, so a value published before a job is submitted is visible to that
/// job on whatever worker thread it runs. There is no way to remove a single
/// entry; the whole map is cleared when the scheduler shuts down.
#[derive(Clone, Default)]
pub struct SharedContext {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl SharedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn publish<T>(&self, key: &ContextKey, value: T)
    where
        T: Any + Send + Sync,
    {
        let entry = Entry {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        };
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(key.as_str().to_owned(), entry);
        trace!(key = %key, ty = type_name::<T>(), "context entry published");
    }

    /// Read the value stored under `key` as a `T`.
    pub fn get<T>(&self, key: &str) -> Result<Arc<T>, ContextError>
    where
        T: Any + Send + Sync,
    {
        let entry = {
            let guard = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            guard.get(key).cloned()
        }
        .ok_or_else(|| ContextError::Missing {
            key: key.to_string(),
        })?;

        entry
            .value
            .downcast::<T>()
            .map_err(|_| ContextError::TypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
                actual: entry.type_name,
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Snapshot of the keys currently published, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedContext")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ContextKey {
        ContextKey::new(s).unwrap()
    }

    #[test]
    fn published_value_is_readable_by_type() {
        let ctx = SharedContext::new();
        ctx.publish(&key("answer"), 42u32);

        let v = ctx.get::<u32>("answer").unwrap();
        assert_eq!(*v, 42);
        assert!(ctx.contains("answer"));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn missing_key_is_reported() {
        let ctx = SharedContext::new();
        let err = ctx.get::<u32>("nope").unwrap_err();
        assert_eq!(
            err,
            ContextError::Missing {
                key: "nope".into()
            }
        );
    }

    #[test]
    fn wrong_type_names_both_types() {
        let ctx = SharedContext::new();
        ctx.publish(&key("answer"), String::from("forty-two"));

        match ctx.get::<u32>("answer") {
            Err(ContextError::TypeMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, "u32");
                assert!(actual.contains("String"), "actual = {actual}");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn clones_share_entries() {
        let ctx = SharedContext::new();
        let other = ctx.clone();
        ctx.publish(&key("a"), 1u8);
        ctx.publish(&key("b"), 2u8);

        assert_eq!(other.keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn publish_replaces_previous_value() {
        let ctx = SharedContext::new();
        ctx.publish(&key("a"), 1u8);
        ctx.publish(&key("a"), 2u8);
        assert_eq!(*ctx.get::<u8>("a").unwrap(), 2);
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn clear_empties_the_map() {
        let ctx = SharedContext::new();
        ctx.publish(&key("a"), 1u8);
        ctx.clear();
        assert!(ctx.is_empty());
    }
}
