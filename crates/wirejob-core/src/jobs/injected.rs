use std::{any::Any, fmt, sync::Arc};

use crate::{
    job::{ExecutionContext, Job, JobError},
    registry::{Registry, RegistryExt, ResolveError},
};

use super::{BeanSink, TracingSink};

/// Job that receives its bean at construction time.
///
/// The registry is consulted once in [`InjectedJob::new`]; a bad name or type
/// is reported to the caller there, so firing cannot fail.
pub struct InjectedJob<T> {
    name: String,
    bean: String,
    value: Arc<T>,
    sink: Arc<dyn BeanSink>,
}

impl<T> InjectedJob<T>
where
    T: Any + Send + Sync + fmt::Display,
{
    pub fn new<R>(
        name: impl Into<String>,
        registry: &R,
        bean: impl Into<String>,
    ) -> Result<Self, ResolveError>
    where
        R: Registry + ?Sized,
    {
        let bean = bean.into();
        let value = registry.resolve::<T>(&bean)?;
        Ok(Self::from_value(name, bean, value))
    }

    /// Wrap an already resolved value.
    pub fn from_value(name: impl Into<String>, bean: impl Into<String>, value: Arc<T>) -> Self {
        Self {
            name: name.into(),
            bean: bean.into(),
            value,
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn BeanSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn value(&self) -> &Arc<T> {
        &self.value
    }
}

impl<T> Job for InjectedJob<T>
where
    T: Any + Send + Sync + fmt::Display,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, _ctx: &ExecutionContext) -> Result<(), JobError> {
        self.sink
            .resolved(&self.name, &self.bean, &self.value.to_string());
        Ok(())
    }
}

impl<T> fmt::Debug for InjectedJob<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectedJob")
            .field("name", &self.name)
            .field("bean", &self.bean)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        jobs::testing::RecordingSink,
        registry::{RegistryHandle, StaticRegistry},
        scheduler::SchedulerHandle,
    };
    use wirejob_model::{BeanList, BeanMap};

    fn registry() -> StaticRegistry {
        let data: BeanMap = [("key1", "value1")].into_iter().collect();
        StaticRegistry::new().with_bean("testData", data).unwrap()
    }

    #[test]
    fn resolves_eagerly_and_emits_on_every_fire() {
        let sink = Arc::new(RecordingSink::default());
        let job = InjectedJob::<BeanMap>::new("injected", &registry(), "testData")
            .unwrap()
            .with_sink(sink.clone());

        // no registry is published: the job does not need one
        let handle = SchedulerHandle::detached("test");
        handle.fire(&job, "slot").unwrap();
        handle.fire(&job, "slot").unwrap();

        assert_eq!(
            sink.lines(),
            vec!["testData = {key1=value1}", "testData = {key1=value1}"]
        );
        assert!(sink.errors().is_empty());
    }

    #[test]
    fn construction_reports_bad_name() {
        let err = InjectedJob::<BeanMap>::new("injected", &registry(), "other").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                name: "other".into()
            }
        );
    }

    #[test]
    fn construction_reports_bad_type() {
        let err = InjectedJob::<BeanList>::new("injected", &registry(), "testData").unwrap_err();
        assert!(matches!(err, ResolveError::TypeMismatch { .. }));
    }

    #[test]
    fn accepts_trait_object_registries() {
        let handle = RegistryHandle::new(registry());
        let job = InjectedJob::<BeanMap>::new("injected", &*handle, "testData").unwrap();
        assert_eq!(job.value().get("key1"), Some("value1"));
    }
}
