mod domain;
pub use domain::{APPLICATION_CONTEXT_KEY, DEFAULT_BEAN_NAME};
pub use domain::{BeanKind, BeanList, BeanMap, BeanValue, JobStatus, Slot, TimeoutMs};

mod error;
pub use error::{ModelError, ModelResult};

mod strategy;
pub use strategy::{AdmissionStrategy, FailurePolicy, JitterStrategy};

mod trigger;
pub use trigger::{DEFAULT_FIRE_TIMEOUT_MS, Schedule, TriggerSpec};
