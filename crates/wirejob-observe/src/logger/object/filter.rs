use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

const DEFAULT_FILTER: &str = "info";

/// Validated `EnvFilter` expression.
///
/// The raw string is kept so it can be serialized back; the filter itself is
/// built on demand because `EnvFilter` is neither `Clone` nor `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogFilter(String);

impl LogFilter {
    pub fn new(expr: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(expr.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        Self(DEFAULT_FILTER.to_string())
    }
}

impl TryFrom<String> for LogFilter {
    type Error = LoggerError;

    fn try_from(expr: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&expr) {
            Ok(_) => Ok(Self(expr)),
            Err(e) => Err(LoggerError::InvalidFilter {
                filter: expr,
                reason: e.to_string(),
            }),
        }
    }
}

impl FromStr for LogFilter {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<LogFilter> for String {
    fn from(f: LogFilter) -> Self {
        f.0
    }
}

impl fmt::Display for LogFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
