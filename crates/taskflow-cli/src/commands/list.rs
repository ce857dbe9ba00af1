//! List command: the task-list view with filter badges.

use anyhow::Result;
use chrono::Utc;
use taskflow_core::view::{self, Filter, FilterCounts};
use tracing::debug;

use super::Ctx;

pub async fn run(ctx: &Ctx, filter: &str, search: Option<&str>) -> Result<()> {
    debug!("list command: filter={}, search={:?}", filter, search);

    let filter: Filter = filter.parse()?;
    let search = search.unwrap_or("");
    let today = Utc::now().date_naive();

    let tasks = ctx.services.tasks.get_all().await?;
    let categories = ctx.services.categories.get_all().await?;

    // Badge counts are global, independent of the active filter and query.
    let counts = FilterCounts::compute(&tasks, today);
    println!(
        "All ({}) · Today ({}) · Overdue ({}) · Completed ({})\n",
        counts.all, counts.today, counts.overdue, counts.completed
    );

    let heading = match filter {
        Filter::All => "All Tasks".to_string(),
        Filter::Today => "Due Today".to_string(),
        Filter::Overdue => "Overdue Tasks".to_string(),
        Filter::Completed => "Completed Tasks".to_string(),
        Filter::Category(id) => categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Category Tasks".to_string()),
    };

    let visible = view::visible_tasks(&tasks, filter, search, today);

    if visible.is_empty() {
        let (title, hint) = empty_state(filter, !search.trim().is_empty());
        println!("{title}");
        println!("{hint}");
        return Ok(());
    }

    println!("{} ({} tasks)\n", heading, visible.len());
    super::print_tasks(&visible, &ctx.config);

    Ok(())
}

/// Filter-specific empty-state copy.
fn empty_state(filter: Filter, searching: bool) -> (&'static str, &'static str) {
    match filter {
        Filter::Today => (
            "No tasks due today",
            "You're all caught up for today! Great job staying on top of your tasks.",
        ),
        Filter::Overdue => (
            "No overdue tasks",
            "Excellent! You're staying on top of your deadlines.",
        ),
        Filter::Completed => (
            "No completed tasks yet",
            "Complete some tasks to see them here.",
        ),
        _ => {
            if searching {
                ("No tasks found", "Try adjusting your search terms.")
            } else {
                ("No tasks found", "Get started by creating your first task!")
            }
        }
    }
}
