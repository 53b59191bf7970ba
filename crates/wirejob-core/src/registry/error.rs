use thiserror::Error;

/// Failure to resolve a bean by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no bean named '{name}' is registered")]
    NotFound { name: String },

    #[error("bean '{name}' is a {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ResolveError {
    /// Short label used for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ResolveError::NotFound { .. } => "not_found",
            ResolveError::TypeMismatch { .. } => "type_mismatch",
        }
    }
}

/// Failure while building a registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("bean name must not be empty")]
    EmptyName,

    #[error("bean '{0}' is already registered")]
    Duplicate(String),
}
