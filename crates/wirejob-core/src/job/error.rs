use thiserror::Error;

use crate::{context::ContextError, registry::ResolveError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobError {
    /// The shared context does not hold a usable registry handle.
    #[error("configuration error")]
    Configuration(#[from] ContextError),

    /// The registry could not produce the requested bean.
    #[error("resolution error")]
    Resolution(#[from] ResolveError),
}

impl JobError {
    /// Short label used for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            JobError::Configuration(ContextError::TypeMismatch { .. }) => "registry_type_mismatch",
            JobError::Configuration(_) => "missing_registry",
            JobError::Resolution(e) => e.as_label(),
        }
    }

    /// One-line message with the underlying cause, for job state and task failures.
    pub fn detail(&self) -> String {
        match self {
            JobError::Configuration(e) => format!("{self}: {e}"),
            JobError::Resolution(e) => format!("{self}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_cause() {
        let missing = JobError::from(ContextError::Missing {
            key: "applicationContext".into(),
        });
        assert_eq!(missing.as_label(), "missing_registry");

        let mistyped = JobError::from(ContextError::TypeMismatch {
            key: "applicationContext".into(),
            expected: "RegistryHandle",
            actual: "String",
        });
        assert_eq!(mistyped.as_label(), "registry_type_mismatch");

        let res = JobError::from(ResolveError::NotFound {
            name: "testData".into(),
        });
        assert_eq!(res.as_label(), "not_found");
    }

    #[test]
    fn detail_carries_the_cause_once() {
        let err = JobError::from(ResolveError::NotFound {
            name: "testData".into(),
        });
        assert_eq!(err.to_string(), "resolution error");
        assert_eq!(
            err.detail(),
            "resolution error: no bean named 'testData' is registered"
        );
    }
}
