//! Simulated per-operation latency.
//!
//! The original services slept before every operation to emulate network
//! round-trips. Latency is injected into each service so tests can run
//! with [`Latency::zero`] while production keeps the original timings.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Latency {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub query: Duration,
    pub create: Duration,
    pub update: Duration,
    pub remove: Duration,
    pub search: Duration,
    pub prefs_read: Duration,
    pub prefs_write: Duration,
    pub count_update: Duration,
}

impl Default for Latency {
    /// The delays the original mock services used, in milliseconds.
    fn default() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            query: Duration::from_millis(250),
            create: Duration::from_millis(300),
            update: Duration::from_millis(250),
            remove: Duration::from_millis(200),
            search: Duration::from_millis(300),
            prefs_read: Duration::from_millis(150),
            prefs_write: Duration::from_millis(200),
            count_update: Duration::from_millis(100),
        }
    }
}

impl Latency {
    /// No delays; for tests and `--no-latency` runs.
    pub fn zero() -> Self {
        Self {
            get_all: Duration::ZERO,
            get_by_id: Duration::ZERO,
            query: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            remove: Duration::ZERO,
            search: Duration::ZERO,
            prefs_read: Duration::ZERO,
            prefs_write: Duration::ZERO,
            count_update: Duration::ZERO,
        }
    }

    /// Suspend for `delay`. The caller's future parks; the runtime stays
    /// responsive to other operations meanwhile.
    pub async fn wait(delay: Duration) {
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
    }
}
