use std::time::Duration;

use taskvisor::{ControllerSpec, TaskRef, TaskSpec};
use wirejob_model::TriggerSpec;

use super::{to_admission_policy, to_backoff_policy, to_restart_policy};

pub fn to_task_spec(task: TaskRef, t: &TriggerSpec) -> TaskSpec {
    TaskSpec::new(
        task,
        to_restart_policy(t.schedule),
        to_backoff_policy(t),
        Some(Duration::from_millis(t.timeout_ms)),
    )
}

pub fn to_controller_spec(task: TaskRef, t: &TriggerSpec) -> ControllerSpec {
    ControllerSpec {
        admission: to_admission_policy(t.admission),
        task_spec: to_task_spec(task, t),
    }
}
