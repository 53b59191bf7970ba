//! Metrics collection abstraction for job firings.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are handed to the scheduler builder.
mod backend;
pub use backend::{JobOutcome, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
