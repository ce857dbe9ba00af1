//! Task service: CRUD and query operations over the task collection.

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::latency::Latency;
use crate::models::{NewTask, Task, TaskPatch};
use crate::services::SharedStore;

#[derive(Clone)]
pub struct TaskService {
    store: SharedStore,
    latency: Latency,
}

impl TaskService {
    pub fn new(store: SharedStore, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// All tasks, insertion order preserved.
    pub async fn get_all(&self) -> Result<Vec<Task>> {
        Latency::wait(self.latency.get_all).await;
        Ok(self.store.lock().await.tasks())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Task> {
        Latency::wait(self.latency.get_by_id).await;
        self.store.lock().await.task(id)
    }

    pub async fn get_by_category(&self, category_id: i64) -> Result<Vec<Task>> {
        Latency::wait(self.latency.query).await;
        Ok(self.store.lock().await.tasks_by_category(category_id))
    }

    /// Tasks whose due date equals today's UTC calendar date.
    pub async fn get_today_tasks(&self) -> Result<Vec<Task>> {
        Latency::wait(self.latency.query).await;
        let today = Utc::now().date_naive();
        Ok(self.store.lock().await.tasks_due_on(today))
    }

    /// Tasks due strictly before today and not completed.
    pub async fn get_overdue_tasks(&self) -> Result<Vec<Task>> {
        Latency::wait(self.latency.query).await;
        let today = Utc::now().date_naive();
        Ok(self.store.lock().await.overdue_tasks(today))
    }

    pub async fn create(&self, input: NewTask) -> Result<Task> {
        debug!(title = %input.title, "create task requested");
        Latency::wait(self.latency.create).await;
        Ok(self.store.lock().await.create_task(input))
    }

    pub async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task> {
        Latency::wait(self.latency.update).await;
        self.store.lock().await.update_task(id, &patch)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        Latency::wait(self.latency.remove).await;
        self.store.lock().await.delete_task(id)
    }

    pub async fn toggle_complete(&self, id: i64) -> Result<Task> {
        Latency::wait(self.latency.remove).await;
        self.store.lock().await.toggle_task_complete(id)
    }

    /// Case-insensitive substring search over title and description.
    /// The service does not special-case the empty query; a blank query
    /// matches every task and is the caller's job to intercept.
    pub async fn search(&self, query: &str) -> Result<Vec<Task>> {
        Latency::wait(self.latency.search).await;
        Ok(self.store.lock().await.search_tasks(query))
    }
}
