//! Translation of model-level triggers into taskvisor policies.
mod admission;
mod jitter;
mod schedule;
mod spec;

pub use admission::to_admission_policy;
pub use jitter::to_jitter_policy;
pub use schedule::{to_backoff_policy, to_restart_policy};
pub use spec::{to_controller_spec, to_task_spec};
