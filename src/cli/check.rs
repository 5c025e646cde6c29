//! Handler for the `check` command.

use crate::cli::{CheckCommand, ConfigPathArg};
use crate::config::Config;
use crate::error::Result;

/// Execute a diagnostic check.
pub fn execute(command: &CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Config(args) => check_config(args),
    }
}

fn check_config(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;
    println!(
        "Configuration OK: database {}, rule {}",
        config.database.path.display(),
        config.prune.rule
    );
    Ok(())
}
