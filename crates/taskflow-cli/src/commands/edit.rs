//! Edit command: build a partial patch and apply it.

use anyhow::Result;
use chrono::NaiveDate;
use taskflow_core::{Priority, TaskPatch};
use tracing::debug;

use super::Ctx;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    ctx: &Ctx,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    category_id: Option<i64>,
    due: Option<NaiveDate>,
    clear_due: bool,
) -> Result<()> {
    debug!("edit command: id={}", id);

    let priority = priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()?;

    let due_date = if clear_due {
        Some(None)
    } else {
        due.map(Some)
    };

    let patch = TaskPatch {
        title,
        description,
        priority,
        category_id: category_id.map(Some),
        due_date,
        completed: None,
    };

    let task = ctx.services.tasks.update(id, patch).await?;

    println!("\u{2713} Updated: {}", task.title);
    super::print_task(&task, &ctx.config);

    Ok(())
}
