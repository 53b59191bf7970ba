//! Well-known names shared by the scheduler, the bridge and the jobs.

/// Shared-context key under which the scheduler publishes the bean registry.
///
/// Jobs that locate the registry through the scheduler's shared context read it
/// back from this key unless the scheduler was configured with another one.
pub const APPLICATION_CONTEXT_KEY: &str = "applicationContext";

/// Bean resolved by the stock resolving job when no other name is configured.
pub const DEFAULT_BEAN_NAME: &str = "testData";
