use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use super::object::{LogFilter, LogFormat, LogTimeZone};

/// Logger section of the daemon configuration.
///
/// Every field is optional in the input; missing ones take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    pub format: LogFormat,
    /// `EnvFilter` expression, e.g. `"info"` or `"wirejob_core=debug,info"`.
    pub level: LogFilter,
    /// Zone used for timestamps.
    pub tz: LogTimeZone,
    pub with_targets: bool,
    /// Colour text output. Ignored when stdout is not a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogFilter::default(),
            tz: LogTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Whether ANSI colours should actually be emitted.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
