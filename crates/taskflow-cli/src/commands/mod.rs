pub mod add;
pub mod categories;
pub mod dashboard;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod prefs;
pub mod search;

use taskflow_core::{Config, Priority, Services, Task};

pub use add::run as add;
pub use dashboard::run as dashboard;
pub use delete::run as delete;
pub use done::run as done;
pub use edit::run as edit;
pub use list::run as list;
pub use search::run as search;

/// Per-invocation context: the service bundle over the seeded in-memory
/// store, plus display configuration.
pub struct Ctx {
    pub services: Services,
    pub config: Config,
}

pub(crate) fn print_tasks(tasks: &[&Task], config: &Config) {
    for task in tasks {
        print_task(task, config);
    }
}

pub(crate) fn print_task(task: &Task, config: &Config) {
    let color = config.display.color;

    let check = if task.completed {
        if color { "\x1b[32m[x]\x1b[0m" } else { "[x]" }
    } else {
        "[ ]"
    };

    let pri = priority_marker(task.priority, color);

    let due = match task.due_date {
        Some(date) => format!(" due {}", date.format(&config.display.date_format)),
        None => String::new(),
    };

    if color {
        println!(
            "{} {} \x1b[90m#{}\x1b[0m {}\x1b[90m{}\x1b[0m",
            check, pri, task.id, task.title, due
        );
    } else {
        println!("{} {} #{} {}{}", check, pri, task.id, task.title, due);
    }
}

pub(crate) fn priority_marker(priority: Priority, color: bool) -> &'static str {
    if color {
        match priority {
            Priority::High => "\x1b[31m!!!\x1b[0m",
            Priority::Medium => "\x1b[33m!! \x1b[0m",
            Priority::Low => "\x1b[90m!  \x1b[0m",
        }
    } else {
        match priority {
            Priority::High => "!!!",
            Priority::Medium => "!! ",
            Priority::Low => "!  ",
        }
    }
}
