mod filter;
pub use filter::LogFilter;

mod format;
pub use format::LogFormat;

mod timer;
pub(crate) use timer::Rfc3339Timer;

mod timezone;
pub use timezone::{LogTimeZone, init_local_offset};
