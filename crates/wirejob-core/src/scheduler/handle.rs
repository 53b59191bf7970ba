use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use tracing::{debug, warn};

use crate::{
    context::{ContextKey, SharedContext},
    job::{ExecutionContext, FireInfo, Job, JobError},
    metrics::{JobOutcome, MetricsHandle, noop_metrics},
    state::{JobState, JobStates},
};

struct Shared {
    name: String,
    registry_key: ContextKey,
    context: SharedContext,
    started: AtomicBool,
    states: JobStates,
    metrics: MetricsHandle,
}

/// Cheap, clonable reference to a scheduler's shared state.
///
/// Handed to every firing through [`ExecutionContext::scheduler`]. It does
/// not own the supervisor, so holding one never keeps the run loop alive.
#[derive(Clone)]
pub struct SchedulerHandle {
    shared: Arc<Shared>,
}

impl SchedulerHandle {
    /// Create a handle with explicit registry key and metrics backend.
    pub fn new(name: impl Into<String>, registry_key: ContextKey, metrics: MetricsHandle) -> Self {
        Self {
            shared: Arc::new(Shared {
                name: name.into(),
                registry_key,
                context: SharedContext::new(),
                started: AtomicBool::new(false),
                states: JobStates::new(),
                metrics,
            }),
        }
    }

    /// Handle with the default registry key and no-op metrics, not attached to a supervisor.
    pub fn detached(name: impl Into<String>) -> Self {
        Self::new(name, ContextKey::application_context(), noop_metrics())
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// The scheduler-wide context shared by all firings.
    pub fn context(&self) -> &SharedContext {
        &self.shared.context
    }

    /// Key under which the bean registry is published.
    pub fn registry_key(&self) -> &ContextKey {
        &self.shared.registry_key
    }

    pub fn metrics(&self) -> &MetricsHandle {
        &self.shared.metrics
    }

    pub fn is_started(&self) -> bool {
        self.shared.started.load(Ordering::Acquire)
    }

    pub fn job_state(&self, job: &str) -> Option<JobState> {
        self.shared.states.get(job)
    }

    /// Names of all jobs with recorded state, sorted.
    pub fn jobs(&self) -> Vec<String> {
        self.shared.states.jobs()
    }

    pub(crate) fn states(&self) -> &JobStates {
        &self.shared.states
    }

    pub(crate) fn set_started(&self, started: bool) {
        self.shared.started.store(started, Ordering::Release);
    }

    /// Run one firing of `job` on the calling thread.
    ///
    /// This is what the supervisor task does on every trigger: bump the job's
    /// fire count, build the [`ExecutionContext`], run the job and record the
    /// outcome in job state and metrics.
    pub fn fire(&self, job: &dyn Job, slot: &str) -> Result<(), JobError> {
        let name = job.name();
        let sequence = self.shared.states.begin_fire(name);
        self.shared.metrics.record_job_fired(name);

        let ctx = ExecutionContext::new(self.clone(), name, FireInfo::now(sequence, slot));
        let fire_id = ctx.fire().fire_id;
        let started = Instant::now();
        let res = job.execute(&ctx);
        let duration_ms = started.elapsed().as_millis() as u64;

        match &res {
            Ok(()) => {
                self.shared.states.finish_fire(name, None);
                self.shared
                    .metrics
                    .record_job_completed(name, JobOutcome::Success, duration_ms);
                debug!(job = name, %fire_id, seq = sequence, duration_ms, "job firing completed");
            }
            Err(e) => {
                self.shared.states.finish_fire(name, Some(e.detail()));
                self.shared
                    .metrics
                    .record_job_completed(name, JobOutcome::Failure, duration_ms);
                warn!(job = name, %fire_id, seq = sequence, error = %e.detail(), "job firing failed");
            }
        }
        res
    }

    /// Account for a firing that was dropped before the job body ran.
    ///
    /// Job state is left untouched: the fire count only covers firings that
    /// actually executed.
    pub fn record_canceled(&self, job: &str) {
        self.shared
            .metrics
            .record_job_completed(job, JobOutcome::Canceled, 0);
        debug!(job, "job firing canceled");
    }
}

impl fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("name", &self.shared.name)
            .field("registry_key", &self.shared.registry_key)
            .field("started", &self.is_started())
            .field("context", &self.shared.context)
            .finish()
    }
}
