use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use super::LogTimeZone;

/// RFC 3339 timestamps in the configured zone.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rfc3339Timer {
    tz: LogTimeZone,
}

impl Rfc3339Timer {
    pub(crate) fn new(tz: LogTimeZone) -> Self {
        Self { tz }
    }

    fn now(&self) -> Option<String> {
        OffsetDateTime::now_utc()
            .to_offset(self.tz.offset())
            .format(&Rfc3339)
            .ok()
    }
}

impl FormatTime for Rfc3339Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match self.now() {
            Some(ts) => write!(w, "{ts} "),
            None => write!(w, "<invalid-time> "),
        }
    }
}
