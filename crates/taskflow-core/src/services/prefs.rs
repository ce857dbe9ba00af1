//! Preferences service: get, merge-update and reset over a single
//! untyped mapping.

use crate::error::Result;
use crate::latency::Latency;
use crate::models::Preferences;
use crate::services::SharedStore;

#[derive(Clone)]
pub struct PrefsService {
    store: SharedStore,
    latency: Latency,
}

impl PrefsService {
    pub fn new(store: SharedStore, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub async fn get(&self) -> Result<Preferences> {
        Latency::wait(self.latency.prefs_read).await;
        Ok(self.store.lock().await.preferences())
    }

    /// Shallow-merge `patch` keys over the current preferences and return
    /// the merged copy.
    pub async fn update(&self, patch: Preferences) -> Result<Preferences> {
        Latency::wait(self.latency.prefs_write).await;
        Ok(self.store.lock().await.update_preferences(patch))
    }

    /// Restore the seeded defaults.
    pub async fn reset(&self) -> Result<Preferences> {
        Latency::wait(self.latency.prefs_read).await;
        Ok(self.store.lock().await.reset_preferences())
    }
}
