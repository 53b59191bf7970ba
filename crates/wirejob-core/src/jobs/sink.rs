use std::{error::Error, fmt::Write};

use tracing::{error, info};

use crate::job::JobError;

/// Destination for the values a job resolves and the failures it swallows.
pub trait BeanSink: Send + Sync {
    /// A bean was resolved; `rendered` is its `Display` form.
    fn resolved(&self, job: &str, bean: &str, rendered: &str);

    /// Resolving `bean` failed.
    fn failed(&self, job: &str, bean: &str, error: &JobError);
}

/// Sink that writes to `tracing`: one `info` line per resolved bean, one
/// `error` line with the full cause chain per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl BeanSink for TracingSink {
    fn resolved(&self, job: &str, bean: &str, rendered: &str) {
        info!(job, bean, "{bean} = {rendered}");
    }

    fn failed(&self, job: &str, bean: &str, err: &JobError) {
        error!(
            job,
            bean,
            kind = err.as_label(),
            trace = %error_chain(err),
            "failed to resolve bean"
        );
    }
}

/// Render an error and its sources, one cause per line.
///
/// ```text
/// resolution error
///   caused by: no bean named 'testData' is registered
/// ```
pub fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, "\n  caused by: {cause}");
        source = cause.source();
    }
    out
}
