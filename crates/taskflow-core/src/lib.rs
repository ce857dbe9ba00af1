pub mod config;
pub mod error;
pub mod latency;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;
pub mod view;

pub use config::{Config, DisplayConfig, LatencyConfig};
pub use error::{Error, Result};
pub use latency::Latency;
pub use models::*;
pub use services::{CategoryService, PrefsService, Services, TaskService};
pub use store::Store;
pub use view::{Filter, FilterCounts, TaskStats};
