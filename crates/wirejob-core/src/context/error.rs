use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("context key must not be empty")]
    EmptyKey,

    #[error("no entry published under context key '{key}'")]
    Missing { key: String },

    #[error("context entry '{key}' is a {actual}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}
