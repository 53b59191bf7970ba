//! Stock jobs that resolve a named bean and report it.
mod sink;
pub use sink::{BeanSink, TracingSink, error_chain};

mod resolving;
pub use resolving::ResolvingJob;

mod injected;
pub use injected::InjectedJob;

#[cfg(test)]
pub(crate) mod testing;
