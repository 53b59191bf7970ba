mod bean;
pub use bean::{BeanKind, BeanList, BeanMap, BeanValue};

mod status;
pub use status::JobStatus;

mod constants;
pub use constants::{APPLICATION_CONTEXT_KEY, DEFAULT_BEAN_NAME};

/// Logical identifier for a supervisor slot.
///
/// Firings that share a slot never overlap; the trigger's admission strategy
/// decides what happens when a new firing targets a busy slot.
pub type Slot = String;

/// Timeout value in milliseconds.
pub type TimeoutMs = u64;
