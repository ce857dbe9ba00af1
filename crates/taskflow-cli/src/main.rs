use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use taskflow_core::{Config, Latency, Services, Store};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Ctx;

/// taskflow - organize your day with clarity
#[derive(Parser)]
#[command(name = "taskflow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Skip the simulated service latency
    #[arg(long, global = true)]
    no_latency: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks under a filter, with per-filter badge counts
    List {
        /// Filter: all, today, overdue, completed or category-<id>
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Restrict to tasks matching a search query
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the progress overview
    Dashboard,

    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<String>,

        /// Category id
        #[arg(short, long)]
        category_id: Option<i64>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// Toggle a task's completion state
    Done {
        /// Task id
        id: i64,
    },

    /// Edit a task
    Edit {
        /// Task id
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<String>,

        /// New category id
        #[arg(short, long)]
        category_id: Option<i64>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        clear_due: bool,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search tasks by title or description
    Search {
        /// Search query
        query: String,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: commands::categories::CategoryCommand,
    },

    /// Manage user preferences
    Prefs {
        #[command(subcommand)]
        command: commands::prefs::PrefsCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    let latency = if cli.no_latency || !config.latency.enabled {
        Latency::zero()
    } else {
        Latency::default()
    };

    let ctx = Ctx {
        services: Services::new(Store::with_seed_data(), latency),
        config,
    };

    match cli.command {
        Commands::List { filter, search } => {
            commands::list(&ctx, &filter, search.as_deref()).await?;
        }
        Commands::Dashboard => {
            commands::dashboard(&ctx).await?;
        }
        Commands::Add {
            title,
            description,
            priority,
            category_id,
            due,
        } => {
            commands::add(&ctx, title, description, priority, category_id, due).await?;
        }
        Commands::Done { id } => {
            commands::done(&ctx, id).await?;
        }
        Commands::Edit {
            id,
            title,
            description,
            priority,
            category_id,
            due,
            clear_due,
        } => {
            commands::edit(
                &ctx,
                id,
                title,
                description,
                priority,
                category_id,
                due,
                clear_due,
            )
            .await?;
        }
        Commands::Delete { id, yes } => {
            commands::delete(&ctx, id, yes).await?;
        }
        Commands::Search { query } => {
            commands::search(&ctx, &query).await?;
        }
        Commands::Categories { command } => {
            commands::categories::run(&ctx, command).await?;
        }
        Commands::Prefs { command } => {
            commands::prefs::run(&ctx, command).await?;
        }
    }

    Ok(())
}
