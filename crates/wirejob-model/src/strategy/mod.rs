mod admission;
pub use admission::AdmissionStrategy;

mod failure;
pub use failure::FailurePolicy;

mod jitter;
pub use jitter::JitterStrategy;
