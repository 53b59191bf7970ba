mod config;
mod error;
mod init;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LogFilter, LogFormat, LogTimeZone, init_local_offset};

/// Install the global tracing subscriber described by `cfg`.
///
/// Must be called once, early in `main`. A second call fails with
/// [`LoggerError::AlreadyInitialized`].
///
/// With [`LogTimeZone::Local`] call [`init_local_offset`] before the tokio
/// runtime starts, otherwise timestamps fall back to UTC.
///
/// # Examples
/// ```no_run
/// use wirejob_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).unwrap();
/// tracing::info!("ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LogFormat::Text => init::text(cfg),
        LogFormat::Json => init::json(cfg),
        LogFormat::Journald => init::journald(cfg),
    }
}
