use serde::{Deserialize, Serialize};

use crate::{
    domain::{Slot, TimeoutMs},
    error::{ModelError, ModelResult},
    strategy::{AdmissionStrategy, JitterStrategy},
};

/// Timeout applied to a single firing when none is configured.
pub const DEFAULT_FIRE_TIMEOUT_MS: TimeoutMs = 30_000;

fn default_timeout_ms() -> TimeoutMs {
    DEFAULT_FIRE_TIMEOUT_MS
}

/// When a job fires.
///
/// There is no calendar or misfire handling: `Every` relies on the supervisor
/// re-running the task after each successful firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Schedule {
    /// Fire exactly once.
    Once,
    /// Fire repeatedly with a fixed delay between firings.
    Every {
        #[serde(rename = "intervalMs")]
        interval_ms: u64,
    },
}

impl Schedule {
    pub fn is_periodic(&self) -> bool {
        matches!(self, Schedule::Every { .. })
    }
}

/// Trigger attached to a job at registration time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSpec {
    /// Supervisor slot; firings in one slot never overlap.
    pub slot: Slot,
    pub schedule: Schedule,
    /// Hard limit for a single firing.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: TimeoutMs,
    #[serde(default)]
    pub admission: AdmissionStrategy,
    /// Spread applied to the delay of periodic triggers.
    #[serde(default)]
    pub jitter: JitterStrategy,
}

impl TriggerSpec {
    /// A trigger that fires once in the given slot.
    pub fn once(slot: impl Into<Slot>) -> Self {
        Self {
            slot: slot.into(),
            schedule: Schedule::Once,
            timeout_ms: DEFAULT_FIRE_TIMEOUT_MS,
            admission: AdmissionStrategy::default(),
            jitter: JitterStrategy::default(),
        }
    }

    /// A trigger that fires every `interval_ms` milliseconds.
    pub fn every(slot: impl Into<Slot>, interval_ms: u64) -> Self {
        Self {
            schedule: Schedule::Every { interval_ms },
            ..Self::once(slot)
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: TimeoutMs) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_admission(mut self, admission: AdmissionStrategy) -> Self {
        self.admission = admission;
        self
    }

    pub fn with_jitter(mut self, jitter: JitterStrategy) -> Self {
        self.jitter = jitter;
        self
    }

    /// Validate the trigger before it is handed to the supervisor.
    ///
    /// Rules:
    /// - `slot` is not empty or whitespace-only;
    /// - `timeout_ms` is positive;
    /// - periodic triggers have a positive interval.
    pub fn validate(&self) -> ModelResult<()> {
        if self.slot.trim().is_empty() {
            return Err(ModelError::InvalidTrigger("slot is empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(ModelError::InvalidTrigger(format!(
                "slot '{}': timeout_ms must be positive",
                self.slot
            )));
        }
        if let Schedule::Every { interval_ms: 0 } = self.schedule {
            return Err(ModelError::InvalidTrigger(format!(
                "slot '{}': interval_ms must be positive",
                self.slot
            )));
        }
        Ok(())
    }
}
