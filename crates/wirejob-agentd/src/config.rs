use std::{collections::BTreeMap, collections::HashSet, fs, path::Path, time::Duration};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use taskvisor::{ControllerConfig, SupervisorConfig};

use wirejob_model::{
    APPLICATION_CONTEXT_KEY, BeanKind, BeanMap, BeanValue, DEFAULT_BEAN_NAME, FailurePolicy,
    ModelError, ModelResult, TriggerSpec,
};
use wirejob_observe::LoggerConfig;

const DEFAULT_INTERVAL_MS: u64 = 10_000;

/// Daemon bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub scheduler: SchedulerConfig,
    /// Beans registered in the static registry, by name.
    pub beans: BTreeMap<String, BeanValue>,
    pub jobs: Vec<JobConfig>,
    /// Collect prometheus metrics and log them on shutdown.
    pub metrics: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerConfig {
    pub name: String,
    /// Shared-context key the registry is published under.
    pub context_key: String,
    /// How long shutdown waits for each job task to stop.
    pub grace_ms: u64,
    /// Job tasks allowed to run at once (0 = unlimited).
    pub max_concurrent: usize,
    /// Submissions the controller buffers before `schedule` waits.
    pub queue_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            name: "wirejob-agentd".into(),
            context_key: APPLICATION_CONTEXT_KEY.into(),
            grace_ms: 10_000,
            max_concurrent: 0,
            queue_capacity: ControllerConfig::default().queue_capacity,
        }
    }
}

impl SchedulerConfig {
    pub fn supervisor(&self) -> SupervisorConfig {
        SupervisorConfig {
            grace: Duration::from_millis(self.grace_ms),
            max_concurrent: self.max_concurrent,
            ..SupervisorConfig::default()
        }
    }

    pub fn controller(&self) -> ControllerConfig {
        ControllerConfig {
            queue_capacity: self.queue_capacity,
            ..ControllerConfig::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    pub name: String,
    /// Bean resolved on every firing.
    pub bean: String,
    #[serde(default)]
    pub expect: BeanKind,
    #[serde(default)]
    pub policy: FailurePolicy,
    /// Resolve the bean once at startup instead of on every firing.
    #[serde(default)]
    pub injected: bool,
    pub trigger: TriggerSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        let test_data: BeanMap = [("key1", "value1"), ("key2", "value2")]
            .into_iter()
            .collect();

        Self {
            logger: LoggerConfig::default(),
            scheduler: SchedulerConfig::default(),
            beans: BTreeMap::from([(DEFAULT_BEAN_NAME.to_string(), BeanValue::Map(test_data))]),
            jobs: vec![JobConfig {
                name: "nonsense".into(),
                bean: DEFAULT_BEAN_NAME.into(),
                expect: BeanKind::Map,
                policy: FailurePolicy::LogAndContinue,
                injected: false,
                trigger: TriggerSpec::every("nonsense", DEFAULT_INTERVAL_MS),
            }],
            metrics: true,
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("validating config {}", path.display()))?;
        Ok(cfg)
    }

    /// Structural checks that serde cannot express.
    ///
    /// Bean existence is not checked here: a resolving job pointing at an
    /// unknown bean is legal and reports the failure when it fires.
    pub fn validate(&self) -> ModelResult<()> {
        if self.scheduler.name.trim().is_empty() {
            return Err(ModelError::Invalid("scheduler.name is empty".into()));
        }
        if self.scheduler.context_key.trim().is_empty() {
            return Err(ModelError::Invalid("scheduler.contextKey is empty".into()));
        }
        if self.scheduler.queue_capacity == 0 {
            return Err(ModelError::Invalid("scheduler.queueCapacity must be positive".into()));
        }

        let mut seen = HashSet::new();
        for job in &self.jobs {
            if job.name.trim().is_empty() {
                return Err(ModelError::Invalid("job name is empty".into()));
            }
            if !seen.insert(job.name.as_str()) {
                return Err(ModelError::Invalid(format!("duplicate job '{}'", job.name)));
            }
            if job.bean.trim().is_empty() {
                return Err(ModelError::Invalid(format!("job '{}' has no bean", job.name)));
            }
            job.trigger.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirejob_model::Schedule;

    #[test]
    fn default_mirrors_the_test_wiring() {
        let cfg = AppConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.scheduler.context_key, "applicationContext");
        assert!(matches!(cfg.beans.get("testData"), Some(BeanValue::Map(_))));
        assert_eq!(cfg.jobs.len(), 1);
        assert_eq!(cfg.jobs[0].bean, "testData");
        assert!(cfg.jobs[0].trigger.schedule.is_periodic());
    }

    #[test]
    fn parses_full_document() {
        let raw = r#"{
            "logger": { "format": "json", "level": "debug" },
            "scheduler": {
                "name": "agent",
                "contextKey": "beans",
                "graceMs": 2500,
                "maxConcurrent": 4,
                "queueCapacity": 64
            },
            "beans": {
                "testData": { "key1": "value1" },
                "hosts": ["a", "b"],
                "motd": "hello"
            },
            "jobs": [
                {
                    "name": "show",
                    "bean": "testData",
                    "trigger": { "slot": "show", "schedule": { "kind": "once" } }
                },
                {
                    "name": "hosts",
                    "bean": "hosts",
                    "expect": "list",
                    "policy": "propagate",
                    "injected": true,
                    "trigger": {
                        "slot": "hosts",
                        "schedule": { "kind": "every", "intervalMs": 500 },
                        "timeoutMs": 1000
                    }
                }
            ]
        }"#;

        let cfg: AppConfig = serde_json::from_str(raw).unwrap();
        cfg.validate().unwrap();

        assert_eq!(cfg.scheduler.name, "agent");
        let sup = cfg.scheduler.supervisor();
        assert_eq!(sup.grace, Duration::from_millis(2500));
        assert_eq!(sup.max_concurrent, 4);
        assert_eq!(cfg.scheduler.controller().queue_capacity, 64);
        assert_eq!(cfg.beans.len(), 3);
        assert!(matches!(cfg.beans.get("motd"), Some(BeanValue::Text(_))));
        assert!(matches!(cfg.beans.get("hosts"), Some(BeanValue::List(_))));

        let show = &cfg.jobs[0];
        assert_eq!(show.expect, BeanKind::Map);
        assert_eq!(show.policy, FailurePolicy::LogAndContinue);
        assert!(!show.injected);
        assert_eq!(show.trigger.schedule, Schedule::Once);

        let hosts = &cfg.jobs[1];
        assert_eq!(hosts.expect, BeanKind::List);
        assert_eq!(hosts.policy, FailurePolicy::Propagate);
        assert!(hosts.injected);
        assert_eq!(hosts.trigger.timeout_ms, 1000);
        assert!(cfg.metrics);
    }

    #[test]
    fn rejects_duplicate_jobs() {
        let mut cfg = AppConfig::default();
        cfg.jobs.push(cfg.jobs[0].clone());
        assert!(matches!(cfg.validate(), Err(ModelError::Invalid(_))));
    }

    #[test]
    fn rejects_invalid_trigger() {
        let mut cfg = AppConfig::default();
        cfg.jobs[0].trigger = TriggerSpec::every("nonsense", 0);
        assert!(matches!(cfg.validate(), Err(ModelError::InvalidTrigger(_))));
    }

    #[test]
    fn scheduler_defaults_fill_missing_keys() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{ "scheduler": { "name": "agent" } }"#).unwrap();
        assert_eq!(cfg.scheduler.context_key, "applicationContext");
        assert_eq!(cfg.scheduler.supervisor().grace, Duration::from_secs(10));
        assert_eq!(cfg.scheduler.supervisor().max_concurrent, 0);
        assert_eq!(cfg.scheduler.controller().queue_capacity, 1024);
    }

    #[test]
    fn rejects_zero_queue_capacity() {
        let mut cfg = AppConfig::default();
        cfg.scheduler.queue_capacity = 0;
        assert!(matches!(cfg.validate(), Err(ModelError::Invalid(_))));
    }

    #[test]
    fn rejects_blank_context_key() {
        let mut cfg = AppConfig::default();
        cfg.scheduler.context_key = " ".into();
        assert!(cfg.validate().is_err());
    }
}
