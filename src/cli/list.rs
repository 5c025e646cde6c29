//! Handler for the `list` command.

use tracing::info;

use crate::cli::ListArgs;
use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::pruner;

/// Execute the list command (read-only candidate scan).
pub fn execute(args: &ListArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;

    if let Some(ref database) = args.database {
        config.database.path = database.clone();
    }
    if let Some(rule) = args.rule {
        config.prune.rule = rule;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    let rule = config.prune.rule;
    let database_url = config.database.path.display().to_string();
    info!(database = %database_url, rule = %rule, "listing prune candidates");

    let mut conn = db::connect(&database_url)?;
    let candidates = pruner::select_candidates(&mut conn, rule)?;

    for name in &candidates {
        println!("{name}");
    }
    let count = candidates.len();
    let noun = if count == 1 {
        "matching table"
    } else {
        "matching tables"
    };
    println!("{rule}: {count} {noun}.");
    Ok(())
}
