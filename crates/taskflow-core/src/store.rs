//! In-memory mock store for tasks, categories and preferences.
//!
//! This is an explicit store object rather than process-wide module state:
//! construct it with seed data (or empty, or caller-supplied fixtures) and
//! call [`Store::reset`] to restore the seeded collections in tests.
//!
//! All read paths return owned clones, so mutating a returned value never
//! affects store state. Ids are assigned `max(existing, 0) + 1` and are
//! never changed by updates.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    Category, CategoryPatch, NewCategory, NewTask, Preferences, Task, TaskPatch,
};
use crate::seed;

#[derive(Debug, Clone)]
pub struct Store {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    preferences: Preferences,
    seed_tasks: Vec<Task>,
    seed_categories: Vec<Category>,
    seed_preferences: Preferences,
}

impl Store {
    /// Store seeded from the embedded fixtures.
    pub fn with_seed_data() -> Self {
        Self::with_fixtures(seed::tasks(), seed::categories(), seed::preferences())
    }

    /// Empty store (no tasks, no categories, empty preferences).
    pub fn empty() -> Self {
        Self::with_fixtures(Vec::new(), Vec::new(), Preferences::new())
    }

    /// Store seeded from caller-supplied fixtures. `reset()` restores
    /// exactly these collections.
    pub fn with_fixtures(
        tasks: Vec<Task>,
        categories: Vec<Category>,
        preferences: Preferences,
    ) -> Self {
        Self {
            tasks: tasks.clone(),
            categories: categories.clone(),
            preferences: preferences.clone(),
            seed_tasks: tasks,
            seed_categories: categories,
            seed_preferences: preferences,
        }
    }

    /// Restore the collections to their seeded state.
    pub fn reset(&mut self) {
        self.tasks = self.seed_tasks.clone();
        self.categories = self.seed_categories.clone();
        self.preferences = self.seed_preferences.clone();
    }

    // ==================== Tasks ====================

    /// All tasks, insertion order preserved.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn task(&self, id: i64) -> Result<Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("task {id}")))
    }

    pub fn tasks_by_category(&self, category_id: i64) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    pub fn tasks_due_on(&self, date: NaiveDate) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_due_on(date))
            .cloned()
            .collect()
    }

    /// Tasks due strictly before `today` and not completed.
    pub fn overdue_tasks(&self, today: NaiveDate) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_overdue(today))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over title and description.
    /// An empty query matches everything.
    pub fn search_tasks(&self, query: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.matches_search(query))
            .cloned()
            .collect()
    }

    pub fn create_task(&mut self, input: NewTask) -> Task {
        let now = Utc::now();
        let task = Task {
            id: next_id(self.tasks.iter().map(|t| t.id)),
            title: input.title,
            description: input.description.unwrap_or_default(),
            priority: input.priority.unwrap_or_default(),
            category_id: input.category_id,
            due_date: input.due_date,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        debug!(id = task.id, title = %task.title, "create task");
        self.tasks.push(task.clone());
        task
    }

    pub fn update_task(&mut self, id: i64, patch: &TaskPatch) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("task {id}")))?;

        patch.apply_to(task);
        task.updated_at = Utc::now();
        debug!(id, "update task");
        Ok(task.clone())
    }

    pub fn delete_task(&mut self, id: i64) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("task {id}")))?;
        self.tasks.remove(index);
        debug!(id, "delete task");
        Ok(())
    }

    pub fn toggle_task_complete(&mut self, id: i64) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("task {id}")))?;

        task.completed = !task.completed;
        task.updated_at = Utc::now();
        debug!(id, completed = task.completed, "toggle task");
        Ok(task.clone())
    }

    // ==================== Categories ====================

    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn category(&self, id: i64) -> Result<Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("category {id}")))
    }

    pub fn create_category(&mut self, input: NewCategory) -> Category {
        let category = Category {
            id: next_id(self.categories.iter().map(|c| c.id)),
            name: input.name,
            color: input.color,
            icon: input.icon,
            task_count: 0,
        };
        debug!(id = category.id, name = %category.name, "create category");
        self.categories.push(category.clone());
        category
    }

    pub fn update_category(&mut self, id: i64, patch: &CategoryPatch) -> Result<Category> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("category {id}")))?;

        patch.apply_to(category);
        debug!(id, "update category");
        Ok(category.clone())
    }

    /// Removes the category only; tasks referencing it keep their
    /// (now dangling) `category_id`. References are weak by design.
    pub fn delete_category(&mut self, id: i64) -> Result<()> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("category {id}")))?;
        self.categories.remove(index);
        debug!(id, "delete category");
        Ok(())
    }

    /// Push a caller-computed task count onto the denormalized cache.
    pub fn update_category_task_count(&mut self, id: i64, count: i64) -> Result<Category> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("category {id}")))?;

        category.task_count = count;
        Ok(category.clone())
    }

    // ==================== Preferences ====================

    pub fn preferences(&self) -> Preferences {
        self.preferences.clone()
    }

    /// Shallow-merge `patch` keys over the current preferences.
    pub fn update_preferences(&mut self, patch: Preferences) -> Preferences {
        for (key, value) in patch {
            self.preferences.insert(key, value);
        }
        self.preferences.clone()
    }

    pub fn reset_preferences(&mut self) -> Preferences {
        self.preferences = self.seed_preferences.clone();
        self.preferences.clone()
    }
}

/// Next id: `max(existing, 0) + 1`. Ids of deleted entities below the
/// current maximum are never handed out again.
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0).max(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ids_are_monotonic_from_one() {
        let mut store = Store::empty();

        for i in 1..=5 {
            let task = store.create_task(NewTask::new(format!("task {i}")));
            assert_eq!(task.id, i);
        }
    }

    #[test]
    fn test_create_fills_defaults() {
        let mut store = Store::empty();
        let task = store.create_task(NewTask::new("Bare task"));

        assert_eq!(task.description, "");
        assert_eq!(task.priority, crate::models::Priority::Medium);
        assert!(task.category_id.is_none());
        assert!(task.due_date.is_none());
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_not_found() {
        let store = Store::empty();
        assert!(matches!(store.task(42), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_update_refreshes_updated_at_and_keeps_id() {
        let mut store = Store::empty();
        let created = store.create_task(NewTask::new("Before"));

        let patch = TaskPatch {
            title: Some("After".to_string()),
            ..Default::default()
        };
        let updated = store.update_task(created.id, &patch).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_delete_then_fetch_is_not_found() {
        let mut store = Store::empty();
        store.create_task(NewTask::new("one"));
        let two = store.create_task(NewTask::new("two"));
        store.create_task(NewTask::new("three"));

        store.delete_task(two.id).unwrap();

        assert!(matches!(store.task(two.id), Err(Error::NotFound(_))));
        assert!(store.tasks().iter().all(|t| t.id != two.id));
        assert!(matches!(
            store.delete_task(two.id),
            Err(Error::NotFound(_))
        ));

        // The freed id sits below the surviving maximum, so it is not reused.
        let four = store.create_task(NewTask::new("four"));
        assert_eq!(four.id, 4);
    }

    #[test]
    fn test_toggle_complete_flips_both_ways() {
        let mut store = Store::empty();
        let task = store.create_task(NewTask::new("flip me"));

        let on = store.toggle_task_complete(task.id).unwrap();
        assert!(on.completed);

        let off = store.toggle_task_complete(task.id).unwrap();
        assert!(!off.completed);

        assert!(matches!(
            store.toggle_task_complete(999),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_queries_by_date_and_category() {
        let mut store = Store::empty();
        let today = date(2025, 7, 16);

        store.create_task(NewTask {
            title: "due today".to_string(),
            due_date: Some(today),
            category_id: Some(1),
            ..Default::default()
        });
        store.create_task(NewTask {
            title: "overdue".to_string(),
            due_date: Some(date(2025, 7, 10)),
            ..Default::default()
        });
        let done = store.create_task(NewTask {
            title: "overdue but done".to_string(),
            due_date: Some(date(2025, 7, 10)),
            ..Default::default()
        });
        store.toggle_task_complete(done.id).unwrap();

        let due_today = store.tasks_due_on(today);
        assert_eq!(due_today.len(), 1);
        assert_eq!(due_today[0].title, "due today");

        let overdue = store.overdue_tasks(today);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].title, "overdue");

        assert_eq!(store.tasks_by_category(1).len(), 1);
        assert!(store.tasks_by_category(99).is_empty());
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let mut store = Store::empty();
        store.create_task(NewTask {
            title: "Buy milk".to_string(),
            description: Some("from the shop".to_string()),
            ..Default::default()
        });
        store.create_task(NewTask {
            title: "Call Bob".to_string(),
            description: Some("about the milk delivery".to_string()),
            ..Default::default()
        });

        assert_eq!(store.search_tasks("MILK").len(), 2);
        assert_eq!(store.search_tasks("bob").len(), 1);
        assert!(store.search_tasks("xyzzy").is_empty());
        // The store does not special-case the empty query.
        assert_eq!(store.search_tasks("").len(), 2);
    }

    #[test]
    fn test_category_crud_and_weak_references() {
        let mut store = Store::empty();
        let cat = store.create_category(NewCategory {
            name: "Work".to_string(),
            color: "#5B4FE5".to_string(),
            icon: "Briefcase".to_string(),
        });
        assert_eq!(cat.id, 1);
        assert_eq!(cat.task_count, 0);

        let task = store.create_task(NewTask {
            title: "in work".to_string(),
            category_id: Some(cat.id),
            ..Default::default()
        });

        // Deleting the category does not cascade to its tasks.
        store.delete_category(cat.id).unwrap();
        assert!(matches!(store.category(cat.id), Err(Error::NotFound(_))));
        let orphan = store.task(task.id).unwrap();
        assert_eq!(orphan.category_id, Some(cat.id));
    }

    #[test]
    fn test_update_task_count_requires_existing_category() {
        let mut store = Store::empty();
        let cat = store.create_category(NewCategory {
            name: "Work".to_string(),
            ..Default::default()
        });

        let updated = store.update_category_task_count(cat.id, 7).unwrap();
        assert_eq!(updated.task_count, 7);

        assert!(matches!(
            store.update_category_task_count(99, 1),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_preferences_merge_and_reset() {
        let mut seed = Preferences::new();
        seed.insert("theme".to_string(), json!("light"));
        let mut store = Store::with_fixtures(Vec::new(), Vec::new(), seed);

        let mut patch = Preferences::new();
        patch.insert("theme".to_string(), json!("dark"));
        patch.insert("sound".to_string(), json!(true));

        let merged = store.update_preferences(patch);
        assert_eq!(merged["theme"], json!("dark"));
        assert_eq!(merged["sound"], json!(true));

        let restored = store.reset_preferences();
        assert_eq!(restored["theme"], json!("light"));
        assert!(!restored.contains_key("sound"));
    }

    #[test]
    fn test_reset_restores_seeded_collections() {
        let mut store = Store::with_seed_data();
        let before = store.tasks();

        store.create_task(NewTask::new("extra"));
        store.delete_task(before[0].id).unwrap();
        assert_ne!(store.tasks().len(), before.len());

        store.reset();
        assert_eq!(store.tasks(), before);
    }

    #[test]
    fn test_returned_copies_are_isolated() {
        let mut store = Store::empty();
        store.create_task(NewTask::new("original"));

        let mut copy = store.tasks();
        copy[0].title = "mutated".to_string();

        assert_eq!(store.tasks()[0].title, "original");

        let mut single = store.task(1).unwrap();
        single.completed = true;
        assert!(!store.task(1).unwrap().completed);
    }
}
