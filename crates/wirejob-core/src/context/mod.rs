//! Scheduler-wide key/value context readable from every job firing.
mod error;
pub use error::ContextError;

mod key;
pub use key::ContextKey;

mod shared;
pub use shared::SharedContext;
