//! Wall clock port

use chrono::{DateTime, TimeDelta, Utc};

/// Source of "now" for predicates that compare against the current time.
pub trait Clock: Send + Sync {
    /// Current UTC instant.
    fn now(&self) -> DateTime<Utc>;

    /// Absolute distance between `at` and [`Clock::now`].
    fn distance_from_now(&self, at: DateTime<Utc>) -> TimeDelta {
        (self.now() - at).abs()
    }
}
