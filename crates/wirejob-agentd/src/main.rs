mod config;
mod wiring;

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use taskvisor::Subscribe;
use wirejob_core::{context::ContextKey, registry::Registry, scheduler::Scheduler};
use wirejob_observe::{JobEventLogger, LogTimeZone, init_local_offset, init_logger};
use wirejob_prometheus::PrometheusMetrics;

use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // 1) config: first argument or the built-in default
    let cfg = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // 2) logger; the local offset must be read before any thread exists
    if cfg.logger.tz == LogTimeZone::Local {
        init_local_offset();
    }
    init_logger(&cfg.logger)?;
    info!("logger initialized");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?
        .block_on(run(cfg))
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // 3) registry
    let registry = wiring::build_registry(&cfg.beans)?;
    info!(beans = ?registry.names(), "bean registry built");

    // 4) scheduler
    let subscribers: Vec<Arc<dyn Subscribe>> = vec![Arc::new(JobEventLogger)];
    let mut builder = Scheduler::builder(cfg.scheduler.name.as_str())
        .with_registry(registry.clone())
        .with_registry_key(ContextKey::new(&cfg.scheduler.context_key)?)
        .with_supervisor_config(cfg.scheduler.supervisor())
        .with_controller_config(cfg.scheduler.controller())
        .with_subscribers(subscribers);

    let metrics = if cfg.metrics {
        let metrics = PrometheusMetrics::new()?;
        builder = builder.with_metrics(Arc::new(metrics.clone()));
        Some(metrics)
    } else {
        None
    };

    // 5) jobs
    for job in &cfg.jobs {
        builder = builder.with_job(wiring::build_job(job, &registry)?, job.trigger.clone());
    }

    let mut scheduler = builder.build()?;
    scheduler.start().await?;
    info!(scheduler = scheduler.name(), jobs = cfg.jobs.len(), "scheduler running");

    tokio::signal::ctrl_c()
        .await
        .context("waiting for ctrl-c")?;
    scheduler.shutdown().await;

    for job in scheduler.jobs() {
        if let Some(state) = scheduler.job_state(&job) {
            info!(
                job = %job,
                status = %state.status,
                fires = state.fires,
                failures = state.failures,
                "job summary"
            );
        }
    }
    if let Some(metrics) = metrics {
        debug!(metrics = %metrics.render()?, "final metrics");
    }
    Ok(())
}
