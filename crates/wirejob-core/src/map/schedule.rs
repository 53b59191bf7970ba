use std::time::Duration;

use taskvisor::{BackoffPolicy, JitterPolicy, RestartPolicy};
use wirejob_model::{Schedule, TriggerSpec};

use super::to_jitter_policy;

/// `Once` runs a single time; `Every` is restarted `interval_ms` after each successful firing.
pub fn to_restart_policy(s: Schedule) -> RestartPolicy {
    match s {
        Schedule::Once => RestartPolicy::Never,
        Schedule::Every { interval_ms } => RestartPolicy::Always {
            interval: Some(Duration::from_millis(interval_ms)),
        },
    }
}

/// Retry delay after a failed firing; periodic triggers keep their cadence.
pub fn to_backoff_policy(t: &TriggerSpec) -> BackoffPolicy {
    match t.schedule {
        Schedule::Once => BackoffPolicy {
            first: Duration::ZERO,
            max: Duration::ZERO,
            jitter: JitterPolicy::None,
            factor: 1.0,
        },
        Schedule::Every { interval_ms } => {
            let interval = Duration::from_millis(interval_ms);
            BackoffPolicy {
                first: interval,
                max: interval,
                jitter: to_jitter_policy(t.jitter),
                factor: 1.0,
            }
        }
    }
}
