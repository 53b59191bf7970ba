//! Prometheus backend for wirejob scheduler metrics.
//!
//! [`PrometheusMetrics`] implements [`wirejob_core::metrics::MetricsBackend`];
//! hand it to `SchedulerBuilder::with_metrics` and expose [`PrometheusMetrics::gather`]
//! from whatever HTTP server the application already runs.
//!
//! ```rust
//! use std::sync::Arc;
//! use wirejob_core::scheduler::Scheduler;
//! use wirejob_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let scheduler = Scheduler::builder("agent")
//!     .with_metrics(Arc::new(metrics.clone()))
//!     .build()?;
//! # drop(scheduler);
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `wirejob_jobs_fired_total{job}`
//! - `wirejob_jobs_completed_total{job, outcome}`
//! - `wirejob_job_duration_seconds{job}`
//! - `wirejob_resolution_failures_total{job, kind}`
mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
