//! Async service facades over the shared in-memory store.
//!
//! Each operation first awaits its configured latency, then locks the
//! store for a single synchronous critical section. The lock is never
//! held across an await, so every operation is atomic from the caller's
//! perspective and concurrent creates cannot race on id assignment.

pub mod category;
pub mod prefs;
pub mod task;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::latency::Latency;
use crate::store::Store;

pub use category::CategoryService;
pub use prefs::PrefsService;
pub use task::TaskService;

/// Shared handle to the store.
pub type SharedStore = Arc<Mutex<Store>>;

/// The three services bound to one shared store.
#[derive(Clone)]
pub struct Services {
    pub tasks: TaskService,
    pub categories: CategoryService,
    pub prefs: PrefsService,
}

impl Services {
    pub fn new(store: Store, latency: Latency) -> Self {
        let shared: SharedStore = Arc::new(Mutex::new(store));
        Self {
            tasks: TaskService::new(shared.clone(), latency.clone()),
            categories: CategoryService::new(shared.clone(), latency.clone()),
            prefs: PrefsService::new(shared, latency),
        }
    }
}
