use std::sync::Mutex;

use super::BeanSink;
use crate::job::JobError;

/// Sink that records every emission for assertions.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) resolved: Mutex<Vec<String>>,
    pub(crate) failed: Mutex<Vec<JobError>>,
}

impl RecordingSink {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }

    pub(crate) fn errors(&self) -> Vec<JobError> {
        self.failed.lock().unwrap().clone()
    }
}

impl BeanSink for RecordingSink {
    fn resolved(&self, _job: &str, bean: &str, rendered: &str) {
        self.resolved
            .lock()
            .unwrap()
            .push(format!("{bean} = {rendered}"));
    }

    fn failed(&self, _job: &str, _bean: &str, error: &JobError) {
        self.failed.lock().unwrap().push(error.clone());
    }
}
