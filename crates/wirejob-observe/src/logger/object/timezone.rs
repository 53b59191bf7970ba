use std::{
    fmt,
    str::FromStr,
    sync::{PoisonError, RwLock},
};

use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::logger::LoggerError;

/// Local offset captured by [`init_local_offset`]; UTC until then.
static LOCAL_OFFSET: RwLock<UtcOffset> = RwLock::new(UtcOffset::UTC);

/// Zone used for log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTimeZone {
    #[default]
    Utc,
    Local,
}

impl LogTimeZone {
    pub(crate) fn offset(self) -> UtcOffset {
        match self {
            LogTimeZone::Utc => UtcOffset::UTC,
            LogTimeZone::Local => *LOCAL_OFFSET.read().unwrap_or_else(PoisonError::into_inner),
        }
    }
}

impl FromStr for LogTimeZone {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LogTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogTimeZone::Utc => "utc",
            LogTimeZone::Local => "local",
        })
    }
}

/// Capture the system's local UTC offset.
///
/// Call from `main` before the tokio runtime spawns threads: offset detection
/// is refused in multi-threaded processes on most unix platforms. On failure
/// the offset stays UTC.
pub fn init_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    *LOCAL_OFFSET.write().unwrap_or_else(PoisonError::into_inner) = offset;
}
