//! Category management subcommands.

use anyhow::Result;
use clap::Subcommand;
use taskflow_core::NewCategory;
use tracing::debug;

use super::Ctx;

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List categories with live task counts
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,

        /// Display color (hex)
        #[arg(long, default_value = "#5B4FE5")]
        color: String,

        /// Display icon name
        #[arg(long, default_value = "Tag")]
        icon: String,
    },

    /// Delete a category (tasks keep their reference)
    Delete {
        /// Category id
        id: i64,
    },

    /// Recompute and push the denormalized task counts
    SyncCounts,
}

pub async fn run(ctx: &Ctx, command: CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::List => list(ctx).await,
        CategoryCommand::Add { name, color, icon } => add(ctx, name, color, icon).await,
        CategoryCommand::Delete { id } => delete(ctx, id).await,
        CategoryCommand::SyncCounts => sync_counts(ctx).await,
    }
}

async fn list(ctx: &Ctx) -> Result<()> {
    debug!("categories list command");

    let categories = ctx.services.categories.get_all().await?;
    if categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }

    let live = ctx.services.categories.task_counts().await?;

    for category in &categories {
        let count = live.get(&category.id).copied().unwrap_or(0);
        println!(
            "#{} {} — {} task{}",
            category.id,
            category.name,
            count,
            if count == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

async fn add(ctx: &Ctx, name: String, color: String, icon: String) -> Result<()> {
    debug!("categories add command: name={}", name);

    let category = ctx
        .services
        .categories
        .create(NewCategory { name, color, icon })
        .await?;

    println!("\u{2713} Added category: {} (id {})", category.name, category.id);
    Ok(())
}

async fn delete(ctx: &Ctx, id: i64) -> Result<()> {
    debug!("categories delete command: id={}", id);

    let category = ctx.services.categories.get_by_id(id).await?;
    ctx.services.categories.delete(id).await?;

    println!("\u{2713} Deleted category: {}", category.name);
    println!("Tasks in this category were not deleted.");
    Ok(())
}

/// Recompute live counts from the task collection and push them onto the
/// denormalized cache, the way the original presentation layer did.
async fn sync_counts(ctx: &Ctx) -> Result<()> {
    debug!("categories sync-counts command");

    let live = ctx.services.categories.task_counts().await?;
    let categories = ctx.services.categories.get_all().await?;

    for category in &categories {
        let count = live.get(&category.id).copied().unwrap_or(0);
        ctx.services
            .categories
            .update_task_count(category.id, count)
            .await?;
        println!("{} → {}", category.name, count);
    }

    Ok(())
}
