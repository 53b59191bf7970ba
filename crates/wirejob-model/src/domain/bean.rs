use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// String-to-string mapping bean.
///
/// Renders as `{key=value, ...}` in key order.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeanMap(pub BTreeMap<String, String>);

impl BeanMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or overwrite an entry.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for BeanMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for BeanMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}

/// Ordered list-of-strings bean. Renders as `[a, b, ...]`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeanList(pub Vec<String>);

impl BeanList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for BeanList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for BeanList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Declarative bean definition as it appears in bootstrap configuration.
///
/// Each shape is registered under its own Rust type (`BeanMap`, `BeanList`,
/// `String`), so resolving a bean with the wrong expected type is detectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BeanValue {
    /// JSON object of string values.
    Map(BeanMap),
    /// JSON array of strings.
    List(BeanList),
    /// Plain JSON string.
    Text(String),
}

impl BeanValue {
    /// Returns the shape of this definition.
    pub fn kind(&self) -> BeanKind {
        match self {
            BeanValue::Map(_) => BeanKind::Map,
            BeanValue::List(_) => BeanKind::List,
            BeanValue::Text(_) => BeanKind::Text,
        }
    }
}

/// Expected bean shape requested by a job.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BeanKind {
    #[default]
    Map,
    List,
    Text,
}

impl BeanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeanKind::Map => "map",
            BeanKind::List => "list",
            BeanKind::Text => "text",
        }
    }
}

impl FromStr for BeanKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(BeanKind::Map),
            "list" => Ok(BeanKind::List),
            "text" | "string" => Ok(BeanKind::Text),
            other => Err(ModelError::UnknownBeanKind(other.to_string())),
        }
    }
}
