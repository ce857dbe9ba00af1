//! Delete command with a confirmation prompt.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use super::Ctx;

pub async fn run(ctx: &Ctx, id: i64, yes: bool) -> Result<()> {
    debug!("delete command: id={}, yes={}", id, yes);

    let task = ctx.services.tasks.get_by_id(id).await?;

    if !yes && !confirm(&format!("Delete task '{}'?", task.title))? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.services.tasks.delete(id).await?;
    println!("\u{2713} Deleted: {}", task.title);

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read confirmation")?;

    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
