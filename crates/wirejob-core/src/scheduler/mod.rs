//! Scheduler facade over a taskvisor [`Supervisor`].
//! - Owns the supervisor and its run loop.
//! - Owns the shared context and publishes the bean registry into it on start.
//! - Turns `(Job, TriggerSpec)` registrations into controller submissions.
mod handle;
pub use handle::SchedulerHandle;

mod task;

use std::{fmt, sync::Arc};

use taskvisor::{ControllerConfig, Subscribe, Supervisor, SupervisorConfig};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, trace, warn};
use wirejob_model::TriggerSpec;

use crate::{
    bridge,
    context::{ContextKey, SharedContext},
    error::CoreError,
    job::Job,
    map::to_controller_spec,
    metrics::{MetricsHandle, noop_metrics},
    registry::RegistryHandle,
    state::JobState,
};

struct Registration {
    job: Arc<dyn Job>,
    trigger: TriggerSpec,
}

/// Builder for [`Scheduler`].
pub struct SchedulerBuilder {
    name: String,
    registry_key: ContextKey,
    registry: Option<RegistryHandle>,
    metrics: MetricsHandle,
    sup_cfg: Option<SupervisorConfig>,
    ctrl_cfg: Option<ControllerConfig>,
    subscribers: Vec<Arc<dyn Subscribe>>,
    jobs: Vec<Registration>,
}

impl SchedulerBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry_key: ContextKey::application_context(),
            registry: None,
            metrics: noop_metrics(),
            sup_cfg: None,
            ctrl_cfg: None,
            subscribers: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Registry to publish into the shared context on start.
    pub fn with_registry(mut self, registry: RegistryHandle) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Override the shared-context key used for the registry.
    pub fn with_registry_key(mut self, key: ContextKey) -> Self {
        self.registry_key = key;
        self
    }

    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_supervisor_config(mut self, cfg: SupervisorConfig) -> Self {
        self.sup_cfg = Some(cfg);
        self
    }

    pub fn with_controller_config(mut self, cfg: ControllerConfig) -> Self {
        self.ctrl_cfg = Some(cfg);
        self
    }

    /// Event subscribers attached to the supervisor.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Register a job to be submitted when the scheduler starts.
    pub fn with_job(mut self, job: Arc<dyn Job>, trigger: TriggerSpec) -> Self {
        self.jobs.push(Registration { job, trigger });
        self
    }

    /// Build a scheduler that is not started yet.
    pub fn build(self) -> Result<Scheduler, CoreError> {
        let handle = SchedulerHandle::new(self.name, self.registry_key, self.metrics);
        let mut scheduler = Scheduler {
            handle,
            registry: self.registry,
            sup_cfg: self.sup_cfg,
            ctrl_cfg: self.ctrl_cfg,
            subscribers: self.subscribers,
            pending: Vec::new(),
            sup: None,
            run_loop: None,
            tasks: Vec::new(),
            stopped: false,
        };
        for reg in self.jobs {
            scheduler.enqueue(reg)?;
        }
        Ok(scheduler)
    }
}

/// Job scheduler backed by a taskvisor supervisor.
///
/// Lifecycle: `build` → `start` → (`schedule` ...) → `shutdown`.
/// Jobs registered before `start` are held back and submitted right after the
/// registry has been published, so no firing can observe a context without it.
pub struct Scheduler {
    handle: SchedulerHandle,
    registry: Option<RegistryHandle>,
    sup_cfg: Option<SupervisorConfig>,
    ctrl_cfg: Option<ControllerConfig>,
    subscribers: Vec<Arc<dyn Subscribe>>,
    pending: Vec<Registration>,
    sup: Option<Arc<Supervisor>>,
    run_loop: Option<JoinHandle<()>>,
    /// Supervisor task names of every submitted registration.
    tasks: Vec<String>,
    stopped: bool,
}

impl Scheduler {
    pub fn builder(name: impl Into<String>) -> SchedulerBuilder {
        SchedulerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        self.handle.name()
    }

    /// Clonable reference to this scheduler's shared state.
    pub fn handle(&self) -> SchedulerHandle {
        self.handle.clone()
    }

    pub fn context(&self) -> &SharedContext {
        self.handle.context()
    }

    pub fn is_started(&self) -> bool {
        self.handle.is_started()
    }

    pub fn job_state(&self, job: &str) -> Option<JobState> {
        self.handle.job_state(job)
    }

    /// Names of all registered jobs, sorted.
    pub fn jobs(&self) -> Vec<String> {
        self.handle.jobs()
    }

    /// Start the supervisor run loop.
    ///
    /// Steps:
    /// 1. Publish the configured registry into the shared context.
    /// 2. Build the supervisor, spawn its run loop and wait until it accepts tasks.
    /// 3. Mark the scheduler as started.
    /// 4. Submit every job registered so far.
    #[instrument(level = "debug", skip(self), fields(scheduler = %self.handle.name()))]
    pub async fn start(&mut self) -> Result<(), CoreError> {
        if self.stopped {
            return Err(CoreError::ShutDown(self.handle.name().to_string()));
        }
        if self.handle.is_started() {
            return Err(CoreError::AlreadyStarted(self.handle.name().to_string()));
        }

        if let Some(registry) = &self.registry {
            bridge::publish_registry(
                self.handle.context(),
                self.handle.registry_key(),
                registry.clone(),
            );
        }

        let sup = Supervisor::builder(self.sup_cfg.take().unwrap_or_default())
            .with_subscribers(std::mem::take(&mut self.subscribers))
            .with_controller(self.ctrl_cfg.take().unwrap_or_default())
            .build();

        let runner = Arc::clone(&sup);
        let name = self.handle.name().to_string();
        let run_loop = tokio::spawn(async move {
            if let Err(e) = runner.run(Vec::new()).await {
                error!(scheduler = %name, error = %e, "supervisor run loop exited with error");
            }
        });
        sup.wait_ready().await;

        self.sup = Some(sup);
        self.run_loop = Some(run_loop);
        self.handle.set_started(true);
        info!(scheduler = %self.handle.name(), "scheduler started");

        for reg in std::mem::take(&mut self.pending) {
            let task = self.submit(&reg).await?;
            self.tasks.push(task);
        }
        Ok(())
    }

    /// Register a job with its trigger.
    ///
    /// Before `start` the registration is queued; afterwards it is submitted
    /// to the supervisor immediately.
    pub async fn schedule(&mut self, job: Arc<dyn Job>, trigger: TriggerSpec) -> Result<(), CoreError> {
        let reg = Registration { job, trigger };
        if self.stopped {
            return Err(CoreError::ShutDown(self.handle.name().to_string()));
        }
        if self.handle.is_started() {
            reg.trigger.validate()?;
            self.handle.states().register(reg.job.name());
            let task = self.submit(&reg).await?;
            self.tasks.push(task);
            Ok(())
        } else {
            self.enqueue(reg)
        }
    }

    /// Stop every job, then the supervisor, then drop the shared context.
    ///
    /// Each submitted task is cancelled and awaited (bounded by the
    /// supervisor's grace period), so no firing runs once this returns and
    /// none ever observes the cleared context. Job state is kept for
    /// inspection. A shut down scheduler cannot be started again.
    #[instrument(level = "debug", skip(self), fields(scheduler = %self.handle.name()))]
    pub async fn shutdown(&mut self) {
        self.stopped = true;
        self.handle.set_started(false);

        if let Some(sup) = self.sup.take() {
            for task in self.tasks.drain(..) {
                match sup.cancel(&task).await {
                    Ok(true) => debug!(task = %task, "job task cancelled"),
                    Ok(false) => trace!(task = %task, "job task already finished"),
                    Err(e) => warn!(task = %task, error = %e, "failed to cancel job task"),
                }
            }
        }
        if let Some(run_loop) = self.run_loop.take() {
            run_loop.abort();
        }
        self.handle.context().clear();
        info!(scheduler = %self.handle.name(), "scheduler shut down");
    }

    fn enqueue(&mut self, reg: Registration) -> Result<(), CoreError> {
        reg.trigger.validate()?;
        self.handle.states().register(reg.job.name());
        self.pending.push(reg);
        Ok(())
    }

    #[instrument(level = "debug", skip(self, reg), fields(job = %reg.job.name(), slot = %reg.trigger.slot))]
    async fn submit(&self, reg: &Registration) -> Result<String, CoreError> {
        let sup = self
            .sup
            .as_ref()
            .ok_or_else(|| CoreError::NotStarted(self.handle.name().to_string()))?;

        let (name, task) = task::build_task(&self.handle, Arc::clone(&reg.job), &reg.trigger);
        debug!(task = %name, "submitting via controller");
        sup.submit(to_controller_spec(task, &reg.trigger))
            .await
            .map_err(|e| CoreError::Supervisor(e.to_string()))?;
        Ok(name)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        // tasks still alive end themselves on their next firing
        self.handle.set_started(false);
        if let Some(run_loop) = self.run_loop.take() {
            run_loop.abort();
        }
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("handle", &self.handle)
            .field("pending", &self.pending.len())
            .field("tasks", &self.tasks)
            .finish()
    }
}
