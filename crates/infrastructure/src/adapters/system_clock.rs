//! Clock over the host's wall time.

use chrono::{DateTime, Utc};
use restq_application::ports::Clock;

/// Reads [`Utc::now`] on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
