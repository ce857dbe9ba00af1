//! Derived view-state: the dashboard's filtering, counting and progress
//! statistics, as pure functions over a task slice.
//!
//! Nothing here touches the store or the clock; `today` is always passed
//! in so the results are deterministic.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::Error;
use crate::models::Task;

/// A named predicate selecting a task subset for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Today,
    Overdue,
    Completed,
    Category(i64),
}

impl Filter {
    fn keeps(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Filter::All => true,
            Filter::Today => task.is_due_on(today),
            Filter::Overdue => task.is_overdue(today),
            Filter::Completed => task.completed,
            Filter::Category(id) => task.category_id == Some(*id),
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "today" => Ok(Filter::Today),
            "overdue" => Ok(Filter::Overdue),
            "completed" => Ok(Filter::Completed),
            other => {
                if let Some(id) = other.strip_prefix("category-") {
                    let id = id.parse::<i64>().map_err(|_| {
                        Error::InvalidInput(format!("bad category id in filter '{other}'"))
                    })?;
                    Ok(Filter::Category(id))
                } else {
                    Err(Error::InvalidInput(format!("unknown filter '{other}'")))
                }
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Today => write!(f, "today"),
            Filter::Overdue => write!(f, "overdue"),
            Filter::Completed => write!(f, "completed"),
            Filter::Category(id) => write!(f, "category-{id}"),
        }
    }
}

/// The ordered task subset surviving the search restriction and then the
/// active filter. Stable: survivors keep their original relative order.
///
/// The search restriction only applies when the query trims non-blank.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    filter: Filter,
    search_query: &str,
    today: NaiveDate,
) -> Vec<&'a Task> {
    let query = search_query.trim();

    tasks
        .iter()
        .filter(|t| query.is_empty() || t.matches_search(query))
        .filter(|t| filter.keeps(t, today))
        .collect()
}

/// Global per-filter badge counts, always computed over the unfiltered
/// collection regardless of the active filter or search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    pub all: usize,
    pub today: usize,
    pub overdue: usize,
    pub completed: usize,
}

impl FilterCounts {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        Self {
            all: tasks.len(),
            today: tasks.iter().filter(|t| t.is_due_on(today)).count(),
            overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }
}

/// Aggregate progress statistics over the full unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub due_today: usize,
    /// `round(100 * completed / total)`, 0 when there are no tasks.
    pub completion_rate: u32,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(today)).count();
        let due_today = tasks.iter().filter(|t| t.is_due_on(today)).count();

        let completion_rate = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total,
            completed,
            overdue,
            due_today,
            completion_rate,
        }
    }
}

/// Live tasks-per-category counts derived from the task collection.
/// Only categories actually referenced by a task appear in the map.
pub fn category_task_counts(tasks: &[Task]) -> HashMap<i64, i64> {
    let mut counts = HashMap::new();
    for task in tasks {
        if let Some(category_id) = task.category_id {
            *counts.entry(category_id).or_insert(0) += 1;
        }
    }
    counts
}
