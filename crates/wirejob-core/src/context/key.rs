use std::{fmt, sync::Arc};

use wirejob_model::APPLICATION_CONTEXT_KEY;

use super::ContextError;

/// Non-empty key into the [`SharedContext`](super::SharedContext).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextKey(Arc<str>);

impl ContextKey {
    /// Validate and wrap a key. Whitespace-only keys are rejected as empty.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ContextError> {
        let key = key.as_ref();
        if key.trim().is_empty() {
            return Err(ContextError::EmptyKey);
        }
        Ok(Self(Arc::from(key)))
    }

    /// Key under which the bean registry is published.
    pub fn application_context() -> Self {
        Self(Arc::from(APPLICATION_CONTEXT_KEY))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContextKey {
    fn default() -> Self {
        Self::application_context()
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ContextKey {
    type Error = ContextError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContextKey {
    type Error = ContextError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_keys() {
        assert_eq!(ContextKey::new(""), Err(ContextError::EmptyKey));
        assert_eq!(ContextKey::new("   "), Err(ContextError::EmptyKey));
    }

    #[test]
    fn default_is_application_context() {
        assert_eq!(ContextKey::default().as_str(), "applicationContext");
    }

    #[test]
    fn keeps_key_verbatim() {
        let key = ContextKey::try_from("beans").unwrap();
        assert_eq!(key.to_string(), "beans");
    }
}
