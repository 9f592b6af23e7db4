//! Wall-clock seam for login replies.

use chrono::Local;

/// `date_time` format sent to terminals (local time, second precision).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait Clock: Send + Sync {
    /// Current time formatted as `YYYY-MM-DD HH:MM:SS`.
    fn now_formatted(&self) -> String;
}

/// Process-local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now_formatted(&self) -> String {
        Local::now().format(DATE_TIME_FORMAT).to_string()
    }
}
