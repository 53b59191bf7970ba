use std::{any::Any, fmt, sync::Arc};

use anyhow::Context;

use wirejob_core::{
    job::Job,
    jobs::{InjectedJob, ResolvingJob},
    registry::{RegistryHandle, StaticRegistry},
};
use wirejob_model::{BeanKind, BeanList, BeanMap, BeanValue};

use crate::config::JobConfig;

/// Build the static registry from the configured beans.
pub fn build_registry<'a, I>(beans: I) -> anyhow::Result<RegistryHandle>
where
    I: IntoIterator<Item = (&'a String, &'a BeanValue)>,
{
    let registry = StaticRegistry::from_values(
        beans
            .into_iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    )
    .context("building bean registry")?;
    Ok(RegistryHandle::new(registry))
}

/// Build the job described by `cfg`, picking the bean type from `expect`.
pub fn build_job(cfg: &JobConfig, registry: &RegistryHandle) -> anyhow::Result<Arc<dyn Job>> {
    match cfg.expect {
        BeanKind::Map => typed::<BeanMap>(cfg, registry),
        BeanKind::List => typed::<BeanList>(cfg, registry),
        BeanKind::Text => typed::<String>(cfg, registry),
    }
}

fn typed<T>(cfg: &JobConfig, registry: &RegistryHandle) -> anyhow::Result<Arc<dyn Job>>
where
    T: Any + Send + Sync + fmt::Display,
{
    if cfg.injected {
        let job = InjectedJob::<T>::new(cfg.name.as_str(), registry, cfg.bean.as_str())
            .with_context(|| format!("injecting bean '{}' into job '{}'", cfg.bean, cfg.name))?;
        return Ok(Arc::new(job));
    }

    Ok(Arc::new(
        ResolvingJob::<T>::new(cfg.name.as_str(), cfg.bean.as_str()).with_policy(cfg.policy),
    ))
}
