use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown admission strategy: {0}")]
    UnknownAdmission(String),

    #[error("unknown jitter strategy: {0}")]
    UnknownJitter(String),

    #[error("unknown failure policy: {0}")]
    UnknownFailurePolicy(String),

    #[error("unknown bean kind: {0}")]
    UnknownBeanKind(String),

    #[error("invalid trigger: {0}")]
    InvalidTrigger(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
