//! User preference subcommands.

use anyhow::Result;
use clap::Subcommand;
use serde_json::Value;
use taskflow_core::Preferences;
use tracing::debug;

use super::Ctx;

#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Show all preferences
    Show,

    /// Set a preference key
    Set {
        /// Preference key
        key: String,

        /// Value (parsed as JSON, falls back to a plain string)
        value: String,
    },

    /// Restore the default preferences
    Reset,
}

pub async fn run(ctx: &Ctx, command: PrefsCommand) -> Result<()> {
    match command {
        PrefsCommand::Show => {
            debug!("prefs show command");
            let prefs = ctx.services.prefs.get().await?;
            print_prefs(&prefs);
        }
        PrefsCommand::Set { key, value } => {
            debug!("prefs set command: key={}", key);
            let value: Value =
                serde_json::from_str(&value).unwrap_or(Value::String(value));

            let mut patch = Preferences::new();
            patch.insert(key, value);

            let merged = ctx.services.prefs.update(patch).await?;
            print_prefs(&merged);
        }
        PrefsCommand::Reset => {
            debug!("prefs reset command");
            let prefs = ctx.services.prefs.reset().await?;
            println!("Preferences restored to defaults.");
            print_prefs(&prefs);
        }
    }

    Ok(())
}

fn print_prefs(prefs: &Preferences) {
    for (key, value) in prefs {
        println!("{key} = {value}");
    }
}
