use std::{any::Any, collections::HashMap, fmt, sync::Arc};

use wirejob_model::{BeanList, BeanMap, BeanValue};

use super::{BeanEntry, Registry, RegistryError};

/// In-memory registry populated once and then shared read-only.
#[derive(Default, Clone)]
pub struct StaticRegistry {
    beans: HashMap<String, BeanEntry>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under `name`.
    ///
    /// Names are unique; registering the same name twice is an error.
    pub fn register<T>(&mut self, name: impl Into<String>, value: T) -> Result<(), RegistryError>
    where
        T: Any + Send + Sync,
    {
        self.insert(name.into(), BeanEntry::new(value))
    }

    /// Register an already shared instance under `name`.
    pub fn register_arc<T>(
        &mut self,
        name: impl Into<String>,
        value: Arc<T>,
    ) -> Result<(), RegistryError>
    where
        T: Any + Send + Sync,
    {
        self.insert(name.into(), BeanEntry::from_arc(value))
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_bean<T>(mut self, name: impl Into<String>, value: T) -> Result<Self, RegistryError>
    where
        T: Any + Send + Sync,
    {
        self.register(name, value)?;
        Ok(self)
    }

    /// Register a declarative bean under the Rust type matching its shape:
    /// maps as [`BeanMap`], lists as [`BeanList`], text as `String`.
    pub fn register_value(
        &mut self,
        name: impl Into<String>,
        value: BeanValue,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        match value {
            BeanValue::Map(m) => self.register(name, m),
            BeanValue::List(l) => self.register(name, l),
            BeanValue::Text(t) => self.register(name, t),
        }
    }

    /// Build a registry from declarative bean definitions.
    pub fn from_values<I, K>(values: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, BeanValue)>,
        K: Into<String>,
    {
        let mut reg = Self::new();
        for (name, value) in values {
            reg.register_value(name, value)?;
        }
        Ok(reg)
    }

    pub fn len(&self) -> usize {
        self.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    fn insert(&mut self, name: String, entry: BeanEntry) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.beans.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.beans.insert(name, entry);
        Ok(())
    }
}

impl Registry for StaticRegistry {
    fn lookup(&self, name: &str) -> Option<BeanEntry> {
        self.beans.get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.beans.keys().cloned().collect();
        names.sort();
        names
    }

    fn contains(&self, name: &str) -> bool {
        self.beans.contains_key(name)
    }
}

impl fmt::Debug for StaticRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticRegistry")
            .field("beans", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{RegistryExt, RegistryHandle, ResolveError};

    fn test_data() -> BeanMap {
        [("key1", "value1"), ("key2", "value2")].into_iter().collect()
    }

    #[test]
    fn resolves_registered_bean_with_its_type() {
        let reg = StaticRegistry::new().with_bean("testData", test_data()).unwrap();

        let map = reg.resolve::<BeanMap>("testData").unwrap();
        assert_eq!(map.get("key1"), Some("value1"));
        assert_eq!(map.to_string(), "{key1=value1, key2=value2}");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let reg = StaticRegistry::new();
        let err = reg.resolve::<BeanMap>("testData").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                name: "testData".into()
            }
        );
        assert_eq!(err.as_label(), "not_found");
    }

    #[test]
    fn wrong_expected_type_is_a_mismatch() {
        let reg = StaticRegistry::new()
            .with_bean("testData", String::from("not a map"))
            .unwrap();

        match reg.resolve::<BeanMap>("testData") {
            Err(ResolveError::TypeMismatch { name, actual, .. }) => {
                assert_eq!(name, "testData");
                assert!(actual.contains("String"));
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_and_empty_names_are_rejected() {
        let mut reg = StaticRegistry::new();
        reg.register("a", 1u8).unwrap();
        assert_eq!(
            reg.register("a", 2u8),
            Err(RegistryError::Duplicate("a".into()))
        );
        assert_eq!(reg.register(" ", 2u8), Err(RegistryError::EmptyName));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn declarative_values_map_to_concrete_types() {
        let reg = StaticRegistry::from_values([
            ("m", BeanValue::Map(test_data())),
            ("l", BeanValue::List(["a", "b"].into_iter().collect())),
            ("t", BeanValue::Text("hi".into())),
        ])
        .unwrap();

        assert!(reg.resolve::<BeanMap>("m").is_ok());
        assert_eq!(reg.resolve::<BeanList>("l").unwrap().len(), 2);
        assert_eq!(reg.resolve::<String>("t").unwrap().as_str(), "hi");
        assert!(reg.resolve::<BeanMap>("l").is_err());
        assert_eq!(reg.names(), vec!["l", "m", "t"]);
    }

    #[test]
    fn shared_instances_keep_identity() {
        let shared = Arc::new(test_data());
        let mut reg = StaticRegistry::new();
        reg.register_arc("testData", Arc::clone(&shared)).unwrap();

        let resolved = reg.resolve::<BeanMap>("testData").unwrap();
        assert!(Arc::ptr_eq(&shared, &resolved));
    }

    #[test]
    fn resolves_through_type_erased_handle() {
        let handle = RegistryHandle::new(
            StaticRegistry::new().with_bean("testData", test_data()).unwrap(),
        );
        let map = handle.resolve::<BeanMap>("testData").unwrap();
        assert_eq!(map.len(), 2);
        assert!(handle.contains("testData"));
        assert!(handle.same_as(&handle.clone()));
    }
}
