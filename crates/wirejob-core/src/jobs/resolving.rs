use std::{any::Any, fmt, marker::PhantomData, sync::Arc};

use wirejob_model::FailurePolicy;

use crate::{
    bridge,
    job::{ExecutionContext, Job, JobError},
    registry::RegistryExt,
};

use super::{BeanSink, TracingSink};

/// Job that finds the bean registry through the scheduler's shared context
/// and resolves one bean of type `T` on every firing.
///
/// Lookup failures are reported to the sink and counted in metrics. What the
/// scheduler sees depends on the [`FailurePolicy`]: with the default
/// `LogAndContinue` the firing always succeeds; with `Propagate` the error is
/// returned.
pub struct ResolvingJob<T> {
    name: String,
    bean: String,
    policy: FailurePolicy,
    sink: Arc<dyn BeanSink>,
    _ty: PhantomData<fn() -> T>,
}

impl<T> ResolvingJob<T>
where
    T: Any + Send + Sync + fmt::Display,
{
    pub fn new(name: impl Into<String>, bean: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bean: bean.into(),
            policy: FailurePolicy::default(),
            sink: Arc::new(TracingSink),
            _ty: PhantomData,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn BeanSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn bean(&self) -> &str {
        &self.bean
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Typed lookup without any reporting.
    ///
    /// 1. Read the registry handle from the shared context under the
    ///    scheduler's registry key (`Configuration` error if absent).
    /// 2. Resolve the bean as `T` (`Resolution` error if missing or mistyped).
    pub fn resolve(&self, ctx: &ExecutionContext) -> Result<Arc<T>, JobError> {
        let scheduler = ctx.scheduler();
        let registry =
            bridge::registry_from_context(scheduler.context(), scheduler.registry_key().as_str())?;
        Ok(registry.resolve::<T>(&self.bean)?)
    }
}

impl<T> Job for ResolvingJob<T>
where
    T: Any + Send + Sync + fmt::Display,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, ctx: &ExecutionContext) -> Result<(), JobError> {
        match self.resolve(ctx) {
            Ok(value) => {
                self.sink.resolved(&self.name, &self.bean, &value.to_string());
                Ok(())
            }
            Err(e) => {
                ctx.scheduler()
                    .metrics()
                    .record_resolution_failure(&self.name, e.as_label());
                self.sink.failed(&self.name, &self.bean, &e);
                match self.policy {
                    FailurePolicy::LogAndContinue => Ok(()),
                    FailurePolicy::Propagate => Err(e),
                }
            }
        }
    }
}

impl<T> fmt::Debug for ResolvingJob<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvingJob")
            .field("name", &self.name)
            .field("bean", &self.bean)
            .field("policy", &self.policy)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;
    use crate::{
        context::{ContextError, ContextKey},
        job::FireInfo,
        jobs::testing::RecordingSink,
        metrics::{JobOutcome, MetricsBackend},
        registry::{RegistryHandle, ResolveError, StaticRegistry},
        scheduler::SchedulerHandle,
    };
    use wirejob_model::{BeanList, BeanMap, JobStatus};

    fn test_data() -> BeanMap {
        [("key1", "value1"), ("key2", "value2")].into_iter().collect()
    }

    fn handle_with(registry: StaticRegistry) -> SchedulerHandle {
        let handle = SchedulerHandle::detached("test");
        bridge::publish_registry(
            handle.context(),
            handle.registry_key(),
            RegistryHandle::new(registry),
        );
        handle
    }

    fn ctx(handle: &SchedulerHandle) -> ExecutionContext {
        ExecutionContext::new(handle.clone(), "nonsense", FireInfo::now(1, "slot"))
    }

    fn job(sink: &Arc<RecordingSink>) -> ResolvingJob<BeanMap> {
        ResolvingJob::<BeanMap>::new("nonsense", "testData").with_sink(sink.clone())
    }

    #[test]
    fn success_emits_exactly_one_line_with_the_value() {
        let handle = handle_with(StaticRegistry::new().with_bean("testData", test_data()).unwrap());
        let sink = Arc::new(RecordingSink::default());

        job(&sink).execute(&ctx(&handle)).unwrap();

        assert_eq!(sink.lines(), vec!["testData = {key1=value1, key2=value2}"]);
        assert!(sink.errors().is_empty());
    }

    #[test]
    fn missing_registry_is_swallowed_and_reported() {
        let handle = SchedulerHandle::detached("test");
        let sink = Arc::new(RecordingSink::default());

        let res = job(&sink).execute(&ctx(&handle));

        assert!(res.is_ok());
        assert!(sink.lines().is_empty());
        let errors = sink.errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            JobError::Configuration(ContextError::Missing { .. })
        ));
    }

    #[test]
    fn unknown_bean_is_swallowed_as_resolution_error() {
        let handle = handle_with(StaticRegistry::new());
        let sink = Arc::new(RecordingSink::default());

        assert!(job(&sink).execute(&ctx(&handle)).is_ok());
        assert_eq!(
            sink.errors(),
            vec![JobError::Resolution(ResolveError::NotFound {
                name: "testData".into()
            })]
        );
    }

    #[test]
    fn wrong_bean_type_is_swallowed_as_resolution_error() {
        let list: BeanList = ["a"].into_iter().collect();
        let handle = handle_with(StaticRegistry::new().with_bean("testData", list).unwrap());
        let sink = Arc::new(RecordingSink::default());

        assert!(job(&sink).execute(&ctx(&handle)).is_ok());
        let errors = sink.errors();
        assert!(matches!(
            errors.as_slice(),
            [JobError::Resolution(ResolveError::TypeMismatch { .. })]
        ));
    }

    #[test]
    fn propagate_policy_returns_the_error() {
        let handle = handle_with(StaticRegistry::new());
        let sink = Arc::new(RecordingSink::default());
        let job = job(&sink).with_policy(FailurePolicy::Propagate);

        let err = job.execute(&ctx(&handle)).unwrap_err();
        assert!(matches!(err, JobError::Resolution(_)));
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn resolve_exposes_the_typed_result() {
        let handle = handle_with(StaticRegistry::new().with_bean("testData", test_data()).unwrap());
        let job = ResolvingJob::<BeanMap>::new("nonsense", "testData");

        let value = job.resolve(&ctx(&handle)).unwrap();
        assert_eq!(value.get("key2"), Some("value2"));
    }

    #[test]
    fn repeated_firings_produce_identical_lines() {
        let handle = handle_with(StaticRegistry::new().with_bean("testData", test_data()).unwrap());
        let sink = Arc::new(RecordingSink::default());
        let job = job(&sink);

        for _ in 0..5 {
            handle.fire(&job, "slot").unwrap();
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l == &lines[0]));
        assert_eq!(handle.job_state("nonsense").unwrap().fires, 5);
    }

    #[test]
    fn custom_registry_key_is_honoured() {
        let key = ContextKey::new("beans").unwrap();
        let handle = SchedulerHandle::new("test", key.clone(), crate::metrics::noop_metrics());
        bridge::publish_registry(
            handle.context(),
            &key,
            RegistryHandle::new(StaticRegistry::new().with_bean("testData", test_data()).unwrap()),
        );
        let sink = Arc::new(RecordingSink::default());

        job(&sink).execute(&ctx(&handle)).unwrap();
        assert_eq!(sink.lines().len(), 1);
    }

    #[derive(Default)]
    struct CountingMetrics {
        failures: AtomicU64,
        completed_ok: AtomicU64,
    }

    impl MetricsBackend for CountingMetrics {
        fn record_job_fired(&self, _: &str) {}

        fn record_job_completed(&self, _: &str, outcome: JobOutcome, _: u64) {
            if outcome == JobOutcome::Success {
                self.completed_ok.fetch_add(1, Ordering::Relaxed);
            }
        }

        fn record_resolution_failure(&self, _: &str, kind: &str) {
            assert_eq!(kind, "missing_registry");
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn swallowed_failures_still_reach_metrics() {
        let metrics = Arc::new(CountingMetrics::default());
        let handle = SchedulerHandle::new("test", ContextKey::default(), metrics.clone());
        let sink = Arc::new(RecordingSink::default());

        handle.fire(&job(&sink), "slot").unwrap();

        assert_eq!(metrics.failures.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.completed_ok.load(Ordering::Relaxed), 1);
        assert_eq!(
            handle.job_state("nonsense").unwrap().status,
            JobStatus::Succeeded
        );
    }
}
