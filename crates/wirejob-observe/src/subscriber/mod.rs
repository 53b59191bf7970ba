//! Logs taskvisor supervisor events through `tracing`.
//!
//! Every scheduler job runs as a supervisor task named `{job}-{slot}-{seq}`,
//! so the `task` field of each record identifies the firing job.
use async_trait::async_trait;
use taskvisor::{Event, EventKind, Subscribe};
use tracing::{debug, error, info, trace, warn};

const QUEUE_CAPACITY: usize = 1024;

/// `Subscribe` implementation that turns supervisor events into log records.
#[derive(Debug, Default, Clone, Copy)]
pub struct JobEventLogger;

#[async_trait]
impl Subscribe for JobEventLogger {
    async fn on_event(&self, event: &Event) {
        log_event(event);
    }

    fn name(&self) -> &'static str {
        "wirejob-events"
    }

    fn queue_capacity(&self) -> usize {
        QUEUE_CAPACITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn severity(kind: EventKind) -> Severity {
    match kind {
        EventKind::TaskAddRequested
        | EventKind::TaskRemoveRequested
        | EventKind::TaskRemoved
        | EventKind::TaskStopped
        | EventKind::ControllerSubmitted => Severity::Trace,

        EventKind::TaskAdded
        | EventKind::TaskStarting
        | EventKind::BackoffScheduled
        | EventKind::ActorExhausted
        | EventKind::ControllerSlotTransition => Severity::Debug,

        EventKind::ShutdownRequested | EventKind::AllStoppedWithinGrace => Severity::Info,

        EventKind::GraceExceeded | EventKind::TimeoutHit | EventKind::ControllerRejected => {
            Severity::Warn
        }

        EventKind::TaskFailed
        | EventKind::ActorDead
        | EventKind::SubscriberPanicked
        | EventKind::SubscriberOverflow => Severity::Error,
    }
}

fn describe(event: &Event) -> &'static str {
    match event.kind {
        EventKind::TaskAddRequested => "job task add requested",
        EventKind::TaskAdded => "job task added",
        EventKind::TaskRemoveRequested => "job task removal requested",
        EventKind::TaskRemoved => "job task removed",
        EventKind::TaskStarting => "job firing",
        EventKind::TaskStopped => "job firing finished",
        EventKind::TaskFailed => "job firing failed",
        EventKind::TimeoutHit => "job firing timed out",
        EventKind::BackoffScheduled if event.reason.is_some() => "job retry scheduled",
        EventKind::BackoffScheduled => "next job firing scheduled",
        EventKind::ActorExhausted => "trigger exhausted, no further firings",
        EventKind::ActorDead => "job task stopped permanently",
        EventKind::ShutdownRequested => "scheduler shutdown requested",
        EventKind::AllStoppedWithinGrace => "all jobs stopped within grace period",
        EventKind::GraceExceeded => "some jobs did not stop within grace period",
        EventKind::SubscriberPanicked => "event subscriber panicked",
        EventKind::SubscriberOverflow => "event dropped, subscriber queue full",
        EventKind::ControllerSubmitted => "trigger submitted",
        EventKind::ControllerRejected => "trigger rejected by admission",
        EventKind::ControllerSlotTransition => "trigger slot transition",
    }
}

fn log_event(event: &Event) {
    let msg = describe(event);
    let task = event.task.as_deref();
    let reason = event.reason.as_deref();
    let attempt = event.attempt;
    let delay_ms = event.delay_ms;
    let timeout_ms = event.timeout_ms;

    match severity(event.kind) {
        Severity::Trace => trace!(task, reason, attempt, "{msg}"),
        Severity::Debug => debug!(task, reason, attempt, delay_ms, "{msg}"),
        Severity::Info => info!(task, reason, "{msg}"),
        Severity::Warn => warn!(task, reason, timeout_ms, "{msg}"),
        Severity::Error => error!(task, reason, attempt, "{msg}"),
    }
}
