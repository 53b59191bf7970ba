use std::fmt;

use time::OffsetDateTime;
use uuid::Uuid;
use wirejob_model::Slot;

use crate::scheduler::SchedulerHandle;

/// Metadata about one trigger firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireInfo {
    /// Unique id of this firing.
    pub fire_id: Uuid,
    /// 1-based count of firings of this job.
    pub sequence: u64,
    pub fired_at: OffsetDateTime,
    pub slot: Slot,
}

impl FireInfo {
    /// Metadata for a firing happening now.
    pub fn now(sequence: u64, slot: impl Into<Slot>) -> Self {
        Self {
            fire_id: Uuid::new_v4(),
            sequence,
            fired_at: OffsetDateTime::now_utc(),
            slot: slot.into(),
        }
    }
}

/// Per-firing value handed to [`Job::execute`](super::Job::execute).
///
/// Lives for one invocation. Gives the job a way back to its scheduler (and
/// through it to the shared context) plus the firing's metadata.
#[derive(Clone)]
pub struct ExecutionContext {
    scheduler: SchedulerHandle,
    job: String,
    fire: FireInfo,
}

impl ExecutionContext {
    pub fn new(scheduler: SchedulerHandle, job: impl Into<String>, fire: FireInfo) -> Self {
        Self {
            scheduler,
            job: job.into(),
            fire,
        }
    }

    /// The scheduler that fired this job.
    pub fn scheduler(&self) -> &SchedulerHandle {
        &self.scheduler
    }

    pub fn job_name(&self) -> &str {
        &self.job
    }

    pub fn fire(&self) -> &FireInfo {
        &self.fire
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("scheduler", &self.scheduler.name())
            .field("job", &self.job)
            .field("fire", &self.fire)
            .finish()
    }
}
