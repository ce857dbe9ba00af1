use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low = 1,
    #[default]
    Medium = 2,
    High = 3,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(Error::InvalidInput(format!(
                "unknown priority '{other}' (expected low, medium or high)"
            ))),
        }
    }
}

/// A user-created unit of work.
///
/// Serializes with the field names the original fixture format used
/// (`Id`, `categoryId`, `dueDate`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// True if the task is due exactly on the given calendar date.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == Some(date)
    }

    /// True if the task is due strictly before `today` and not completed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && !self.completed,
            None => false,
        }
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// The empty needle matches everything; callers are expected to
    /// special-case blank queries themselves.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Input for creating a task. Missing fields take the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial update for a task. `None` fields are left untouched.
///
/// There is deliberately no `id` field, so an update can never change
/// a task's identity. The nested options on `category_id` and `due_date`
/// distinguish "leave alone" from "clear".
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category_id: Option<Option<i64>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Merge the present fields onto `task`. Does not touch `id`,
    /// `created_at` or `updated_at`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category_id) = self.category_id {
            task.category_id = category_id;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// A user-defined grouping label applied to tasks.
///
/// `task_count` is a denormalized cache pushed by callers; it is not
/// maintained automatically by the store. Live counts can be derived
/// with [`crate::view::category_task_counts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: i64,
    pub name: String,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub task_count: i64,
}

/// Input for creating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// Partial update for a category. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl CategoryPatch {
    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
        if let Some(icon) = &self.icon {
            category.icon = icon.clone();
        }
    }
}

/// User preferences: a single untyped mapping, merged wholesale.
pub type Preferences = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_task_fixture_field_names() {
        let json = r#"{
            "Id": 1,
            "title": "Buy milk",
            "description": "",
            "priority": "high",
            "categoryId": 2,
            "dueDate": "2025-07-15",
            "completed": false,
            "createdAt": "2025-07-01T09:00:00Z",
            "updatedAt": "2025-07-01T09:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category_id, Some(2));
        assert_eq!(
            task.due_date,
            Some(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap())
        );
    }

    #[test]
    fn test_task_patch_merges_present_fields_only() {
        let mut task = Task {
            id: 7,
            title: "Original".to_string(),
            description: "keep me".to_string(),
            priority: Priority::Low,
            category_id: Some(1),
            due_date: None,
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let patch = TaskPatch {
            title: Some("Renamed".to_string()),
            completed: Some(true),
            ..Default::default()
        };
        patch.apply_to(&mut task);

        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.description, "keep me");
        assert_eq!(task.category_id, Some(1));
        assert!(task.completed);
    }

    #[test]
    fn test_task_patch_clears_nullable_fields() {
        let mut task = Task {
            id: 1,
            title: "t".to_string(),
            description: String::new(),
            priority: Priority::Medium,
            category_id: Some(3),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 15),
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let patch = TaskPatch {
            category_id: Some(None),
            due_date: Some(None),
            ..Default::default()
        };
        patch.apply_to(&mut task);

        assert!(task.category_id.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_overdue_requires_incomplete() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 16).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();

        let mut task = Task {
            id: 1,
            title: "t".to_string(),
            description: String::new(),
            priority: Priority::Medium,
            category_id: None,
            due_date: Some(yesterday),
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(task.is_overdue(today));

        task.completed = true;
        assert!(!task.is_overdue(today));

        task.completed = false;
        task.due_date = Some(today);
        assert!(!task.is_overdue(today), "due today is not overdue");
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            description: "From the CORNER shop".to_string(),
            priority: Priority::Medium,
            category_id: None,
            due_date: None,
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(task.matches_search("MILK"));
        assert!(task.matches_search("corner"));
        assert!(!task.matches_search("bread"));
        assert!(task.matches_search(""), "empty needle matches everything");
    }
}
