//! Search command: service-level substring search over tasks.

use anyhow::Result;
use tracing::debug;

use super::Ctx;

pub async fn run(ctx: &Ctx, query: &str) -> Result<()> {
    debug!("search command: query={}", query);

    // An empty query would match every task; intercept it here, the
    // service deliberately does not.
    if query.trim().is_empty() {
        println!("Empty query. Use 'taskflow list' to see all tasks.");
        return Ok(());
    }

    let matches = ctx.services.tasks.search(query).await?;

    if matches.is_empty() {
        println!("No matches for \"{}\"", query);
        return Ok(());
    }

    println!("Found {} matches for \"{}\":\n", matches.len(), query);
    let refs: Vec<&taskflow_core::Task> = matches.iter().collect();
    super::print_tasks(&refs, &ctx.config);

    Ok(())
}
