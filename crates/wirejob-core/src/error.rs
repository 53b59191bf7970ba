use thiserror::Error;

use wirejob_model::ModelError;

use crate::registry::RegistryError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("scheduler '{0}' is not started")]
    NotStarted(String),

    #[error("scheduler '{0}' is already started")]
    AlreadyStarted(String),

    #[error("scheduler '{0}' has been shut down")]
    ShutDown(String),

    #[error("invalid trigger: {0}")]
    Trigger(#[from] ModelError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("supervisor error: {0}")]
    Supervisor(String),
}
