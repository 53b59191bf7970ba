//! Named-bean resolution for jobs fired by a taskvisor-backed scheduler.
//!
//! On start the [`Scheduler`](scheduler::Scheduler) publishes a bean
//! registry into its shared context; jobs read it back from their
//! [`ExecutionContext`](job::ExecutionContext) and resolve beans by name.
pub mod bridge;
pub mod context;
pub mod error;
pub mod job;
pub mod jobs;
pub mod map;
pub mod metrics;
pub mod registry;
pub mod scheduler;
pub mod state;

pub mod prelude {
    pub use crate::context::{ContextError, ContextKey, SharedContext};
    pub use crate::error::CoreError;
    pub use crate::job::{ExecutionContext, FireInfo, Job, JobError};
    pub use crate::jobs::{BeanSink, InjectedJob, ResolvingJob, TracingSink};
    pub use crate::metrics::{JobOutcome, MetricsBackend, MetricsHandle, noop_metrics};
    pub use crate::registry::{
        BeanEntry, Registry, RegistryError, RegistryExt, RegistryHandle, ResolveError,
        StaticRegistry,
    };
    pub use crate::scheduler::{Scheduler, SchedulerBuilder, SchedulerHandle};
    pub use crate::state::{JobState, JobStates};
}
