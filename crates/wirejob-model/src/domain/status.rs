use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a registered job as seen by the scheduler.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
    /// Registered, not fired yet.
    #[default]
    Scheduled,
    /// A firing is in progress.
    Running,
    /// The last firing returned normally.
    Succeeded,
    /// The last firing returned an error to the scheduler.
    Failed,
}

impl JobStatus {
    /// Returns `true` once at least one firing has completed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Scheduled => "scheduled",
            JobStatus::Running => "running",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}
