//! Static seed fixtures embedded at compile time.
//!
//! These play the role of the original mock-data JSON files: the store is
//! seeded from them on construction and `reset()` restores them.

use crate::models::{Category, Preferences, Task};

const TASKS_JSON: &str = include_str!("../assets/tasks.json");
const CATEGORIES_JSON: &str = include_str!("../assets/categories.json");
const PREFERENCES_JSON: &str = include_str!("../assets/preferences.json");

pub fn tasks() -> Vec<Task> {
    serde_json::from_str(TASKS_JSON).expect("embedded task fixtures are valid JSON")
}

pub fn categories() -> Vec<Category> {
    serde_json::from_str(CATEGORIES_JSON).expect("embedded category fixtures are valid JSON")
}

pub fn preferences() -> Preferences {
    serde_json::from_str(PREFERENCES_JSON).expect("embedded preference fixtures are valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let tasks = tasks();
        let categories = categories();
        let prefs = preferences();

        assert!(!tasks.is_empty());
        assert!(!categories.is_empty());
        assert!(!prefs.is_empty());
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let tasks = tasks();
        let categories = categories();

        let mut task_ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        task_ids.sort_unstable();
        task_ids.dedup();
        assert_eq!(task_ids.len(), tasks.len());

        let mut cat_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        cat_ids.sort_unstable();
        cat_ids.dedup();
        assert_eq!(cat_ids.len(), categories.len());
    }

    #[test]
    fn test_fixture_task_counts_match_tasks() {
        let tasks = tasks();
        for category in categories() {
            let live = tasks
                .iter()
                .filter(|t| t.category_id == Some(category.id))
                .count() as i64;
            assert_eq!(category.task_count, live, "category {}", category.name);
        }
    }
}
