//! Add command: validate input and create a task.

use anyhow::Result;
use chrono::NaiveDate;
use taskflow_core::{Error, NewTask, Priority};
use tracing::debug;

use super::Ctx;

pub async fn run(
    ctx: &Ctx,
    title: String,
    description: Option<String>,
    priority: Option<String>,
    category_id: Option<i64>,
    due: Option<NaiveDate>,
) -> Result<()> {
    debug!("add command: title={}", title);

    // Validation is the caller's job; the store accepts anything.
    if title.trim().is_empty() {
        return Err(Error::InvalidInput("title must not be empty".to_string()).into());
    }

    let priority = priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()?;

    let task = ctx
        .services
        .tasks
        .create(NewTask {
            title,
            description,
            priority,
            category_id,
            due_date: due,
        })
        .await?;

    println!("\u{2713} Added: {}", task.title);
    println!("  id {} · priority {}", task.id, task.priority);
    if let Some(due) = task.due_date {
        println!("  due {}", due.format(&ctx.config.display.date_format));
    }

    Ok(())
}
