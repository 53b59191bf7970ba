//! Per-job bookkeeping maintained by the scheduler around each firing.
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use wirejob_model::JobStatus;

/// Snapshot of one job's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobState {
    pub status: JobStatus,
    /// Number of firings started so far.
    pub fires: u64,
    /// Number of firings that returned an error to the supervisor.
    pub failures: u64,
    pub last_error: Option<String>,
}

/// Concurrent table of [`JobState`] keyed by job name.
#[derive(Debug, Clone, Default)]
pub struct JobStates {
    inner: Arc<RwLock<HashMap<String, JobState>>>,
}

impl JobStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job as scheduled. Existing counters are kept.
    pub fn register(&self, job: &str) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.entry(job.to_string()).or_default();
    }

    /// Mark a firing as started and return its 1-based sequence number.
    pub fn begin_fire(&self, job: &str) -> u64 {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let state = guard.entry(job.to_string()).or_default();
        state.fires += 1;
        state.status = JobStatus::Running;
        state.fires
    }

    /// Record the result of a firing.
    pub fn finish_fire(&self, job: &str, error: Option<String>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let state = guard.entry(job.to_string()).or_default();
        match error {
            None => state.status = JobStatus::Succeeded,
            Some(reason) => {
                state.status = JobStatus::Failed;
                state.failures += 1;
                state.last_error = Some(reason);
            }
        }
    }

    pub fn get(&self, job: &str) -> Option<JobState> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(job)
            .cloned()
    }

    /// Sorted job names.
    pub fn jobs(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}
