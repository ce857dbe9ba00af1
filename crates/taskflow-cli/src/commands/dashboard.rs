//! Progress overview: completion rate, progress bar and stat cards.

use anyhow::Result;
use chrono::Utc;
use taskflow_core::view::{FilterCounts, TaskStats};
use tracing::debug;

use super::Ctx;

const BAR_WIDTH: usize = 30;

pub async fn run(ctx: &Ctx) -> Result<()> {
    debug!("dashboard command");

    let today = Utc::now().date_naive();
    let tasks = ctx.services.tasks.get_all().await?;
    let stats = TaskStats::compute(&tasks, today);
    let counts = FilterCounts::compute(&tasks, today);

    println!("Progress Overview — {}% Complete\n", stats.completion_rate);

    let filled = BAR_WIDTH * stats.completion_rate as usize / 100;
    let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
    println!(
        "  {}  {} of {} tasks\n",
        bar, stats.completed, stats.total
    );

    println!("  Total Tasks  {}", stats.total);
    println!("  Completed    {}", stats.completed);
    println!("  Due Today    {}", stats.due_today);
    println!("  Overdue      {}", stats.overdue);

    println!(
        "\nFilters: all ({}) · today ({}) · overdue ({}) · completed ({})",
        counts.all, counts.today, counts.overdue, counts.completed
    );

    Ok(())
}
