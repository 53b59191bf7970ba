use std::sync::Arc;

use taskvisor::{TaskError, TaskFn, TaskRef};
use tokio_util::sync::CancellationToken;
use tracing::trace;
use wirejob_model::TriggerSpec;

use crate::job::{Job, make_run_id};

use super::SchedulerHandle;

/// Wrap a job into a supervisor task, returning the task name with it.
///
/// Every run of the task is one firing: it goes through
/// [`SchedulerHandle::fire`] and maps a job error onto `TaskError::Fail`.
/// A run that starts after cancellation or after the scheduler stopped ends
/// the task with `TaskError::Canceled` without touching the job.
pub(crate) fn build_task(
    handle: &SchedulerHandle,
    job: Arc<dyn Job>,
    trigger: &TriggerSpec,
) -> (String, TaskRef) {
    let run_id = make_run_id(job.name(), &trigger.slot);
    let handle = handle.clone();
    let slot = trigger.slot.clone();

    trace!(task = %run_id, job = job.name(), slot = %slot, "building job task");

    let task: TaskRef = TaskFn::arc(run_id.clone(), move |cancel: CancellationToken| {
        let handle = handle.clone();
        let job = Arc::clone(&job);
        let slot = slot.clone();

        async move {
            if cancel.is_cancelled() || !handle.is_started() {
                handle.record_canceled(job.name());
                return Err(TaskError::Canceled);
            }
            handle
                .fire(job.as_ref(), &slot)
                .map_err(|e| TaskError::Fail { reason: e.detail() })
        }
    });
    (run_id, task)
}
