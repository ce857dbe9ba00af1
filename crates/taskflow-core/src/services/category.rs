//! Category service: CRUD plus the denormalized task-count cache.

use std::collections::HashMap;

use crate::error::Result;
use crate::latency::Latency;
use crate::models::{Category, CategoryPatch, NewCategory};
use crate::services::SharedStore;
use crate::view;

#[derive(Clone)]
pub struct CategoryService {
    store: SharedStore,
    latency: Latency,
}

impl CategoryService {
    pub fn new(store: SharedStore, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>> {
        Latency::wait(self.latency.get_all).await;
        Ok(self.store.lock().await.categories())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Category> {
        Latency::wait(self.latency.get_by_id).await;
        self.store.lock().await.category(id)
    }

    pub async fn create(&self, input: NewCategory) -> Result<Category> {
        Latency::wait(self.latency.create).await;
        Ok(self.store.lock().await.create_category(input))
    }

    pub async fn update(&self, id: i64, patch: CategoryPatch) -> Result<Category> {
        Latency::wait(self.latency.update).await;
        self.store.lock().await.update_category(id, &patch)
    }

    /// Deletes the category only. Tasks referencing it are left alone;
    /// the reference is weak.
    pub async fn delete(&self, id: i64) -> Result<()> {
        Latency::wait(self.latency.remove).await;
        self.store.lock().await.delete_category(id)
    }

    /// Push a caller-computed count onto the denormalized `task_count`
    /// cache. Fails with `NotFound` when the category does not exist.
    pub async fn update_task_count(&self, id: i64, count: i64) -> Result<Category> {
        Latency::wait(self.latency.count_update).await;
        self.store.lock().await.update_category_task_count(id, count)
    }

    /// Live tasks-per-category counts derived from the task collection,
    /// bypassing the denormalized cache entirely.
    pub async fn task_counts(&self) -> Result<HashMap<i64, i64>> {
        Latency::wait(self.latency.query).await;
        let store = self.store.lock().await;
        Ok(view::category_task_counts(&store.tasks()))
    }
}
