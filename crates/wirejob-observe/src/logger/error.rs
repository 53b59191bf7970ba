use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("unknown log format '{0}' (expected text|json|journald)")]
    InvalidFormat(String),

    #[error("unknown log timezone '{0}' (expected utc|local)")]
    InvalidTimeZone(String),

    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("journald output is only available on linux")]
    JournaldNotSupported,

    #[error("failed to connect to journald: {0}")]
    Journald(String),

    #[error("global logger already installed")]
    AlreadyInitialized,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
