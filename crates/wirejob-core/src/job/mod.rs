//! Job abstraction invoked by the scheduler on every trigger firing.
mod error;
pub use error::JobError;

mod context;
pub use context::{ExecutionContext, FireInfo};

mod id;
pub use id::make_run_id;

/// Unit of work fired by the scheduler.
///
/// Jobs are shared between firings (and between concurrent firings of
/// different triggers), so they must not keep per-firing state in `self`.
/// A firing runs synchronously to completion on a supervisor worker.
pub trait Job: Send + Sync + 'static {
    /// Job name used for bookkeeping, metrics and logs.
    fn name(&self) -> &str;

    /// Run one firing.
    ///
    /// An `Err` is reported to the supervisor as a task failure.
    fn execute(&self, ctx: &ExecutionContext) -> Result<(), JobError>;
}
