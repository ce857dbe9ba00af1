//! Done command: toggle a task's completion state.

use anyhow::Result;
use tracing::debug;

use super::Ctx;

pub async fn run(ctx: &Ctx, id: i64) -> Result<()> {
    debug!("done command: id={}", id);

    let task = ctx.services.tasks.toggle_complete(id).await?;

    if task.completed {
        println!("\u{2713} Completed: {}", task.title);
    } else {
        println!("Marked as incomplete: {}", task.title);
    }

    Ok(())
}
