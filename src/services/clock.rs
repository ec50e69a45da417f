//! Wall-clock source for elapsed-time sampling

use chrono::Utc;

/// Supplies the current wall-clock time in milliseconds since the Unix epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Clock backed by the system's UTC time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
