use std::sync::Arc;

use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
    proto::MetricFamily,
};

use wirejob_core::metrics::{JobOutcome, MetricsBackend};

const NAMESPACE: &str = "wirejob";

/// Prometheus-backed [`MetricsBackend`].
///
/// Labels are bounded by the set of configured jobs; `outcome` is one of
/// `success|failure|canceled` and `kind` one of
/// `missing_registry|registry_type_mismatch|not_found|type_mismatch`.
#[derive(Clone)]
pub struct PrometheusMetrics {
    fired: CounterVec,
    completed: CounterVec,
    duration: HistogramVec,
    resolution_failures: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Register the wirejob metrics in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let fired = CounterVec::new(
            Opts::new("jobs_fired_total", "Job firings started").namespace(NAMESPACE),
            &["job"],
        )?;
        registry.register(Box::new(fired.clone()))?;

        let completed = CounterVec::new(
            Opts::new("jobs_completed_total", "Job firings finished, by outcome")
                .namespace(NAMESPACE),
            &["job", "outcome"],
        )?;
        registry.register(Box::new(completed.clone()))?;

        let duration = HistogramVec::new(
            HistogramOpts::new("job_duration_seconds", "Job firing duration in seconds")
                .namespace(NAMESPACE)
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["job"],
        )?;
        registry.register(Box::new(duration.clone()))?;

        let resolution_failures = CounterVec::new(
            Opts::new(
                "resolution_failures_total",
                "Bean resolution failures, including swallowed ones",
            )
            .namespace(NAMESPACE),
            &["job", "kind"],
        )?;
        registry.register(Box::new(resolution_failures.clone()))?;

        Ok(Self {
            fired,
            completed,
            duration,
            resolution_failures,
            registry,
        })
    }

    /// Register the wirejob metrics in a fresh registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Render all metrics in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buf = Vec::new();
        encoder.encode(&self.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_job_fired(&self, job: &str) {
        self.fired.with_label_values(&[job]).inc();
    }

    fn record_job_completed(&self, job: &str, outcome: JobOutcome, duration_ms: u64) {
        self.completed
            .with_label_values(&[job, outcome.as_label()])
            .inc();
        self.duration
            .with_label_values(&[job])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_resolution_failure(&self, job: &str, kind: &str) {
        self.resolution_failures
            .with_label_values(&[job, kind])
            .inc();
    }
}
