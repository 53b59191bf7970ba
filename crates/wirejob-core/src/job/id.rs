use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide sequence for supervisor task names.
static RUN_SEQ: AtomicU64 = AtomicU64::new(1);

fn next_seq() -> u64 {
    RUN_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Build the supervisor task name for a registration.
///
/// Format: `{job}-{slot}-{seq:x}`.
pub fn make_run_id(job: &str, slot: &str) -> String {
    format!("{job}-{slot}-{seq:x}", seq = next_seq())
}

#[cfg(test)]
mod tests {
    use super::make_run_id;

    #[test]
    fn run_ids_are_unique_and_prefixed() {
        let a = make_run_id("nonsense", "slot");
        let b = make_run_id("nonsense", "slot");
        assert_ne!(a, b);
        assert!(a.starts_with("nonsense-slot-"));
    }
}
