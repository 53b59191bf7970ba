use std::sync::Arc;

/// How a firing ended, as seen by the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Success,
    Failure,
    Canceled,
}

impl JobOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            JobOutcome::Success => "success",
            JobOutcome::Failure => "failure",
            JobOutcome::Canceled => "canceled",
        }
    }
}

/// Backend metrics collection interface.
///
/// The scheduler calls it around every firing; jobs call
/// [`record_resolution_failure`](MetricsBackend::record_resolution_failure)
/// themselves, so lookups that are logged and swallowed are still counted.
pub trait MetricsBackend: Send + Sync + 'static {
    /// A trigger fired and the job body is about to run.
    fn record_job_fired(&self, job: &str);

    /// The job body returned.
    ///
    /// # Arguments
    /// - `job`: job name
    /// - `outcome`: what the supervisor was told
    /// - `duration_ms`: wall time of the job body
    fn record_job_completed(&self, job: &str, outcome: JobOutcome, duration_ms: u64);

    /// A bean lookup failed inside a job.
    ///
    /// `kind` is a short label such as `not_found`, `type_mismatch`, `missing_registry`
    /// or `registry_type_mismatch`.
    fn record_resolution_failure(&self, job: &str, kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
