//! Handler for the `prune` command.

use tracing::info;

use crate::cli::PruneArgs;
use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::pruner;

/// Execute the prune command.
pub fn execute(args: &PruneArgs) -> Result<()> {
    // Load and merge configuration
    let mut config = Config::load_or_default(args.config.as_deref())?;

    // Apply CLI overrides
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
    info!(database = %database_url, rule = %rule, dry_run = args.dry_run, "stkprune starting");

    let mut conn = db::connect(&database_url)?;
    let candidates = pruner::select_candidates(&mut conn, rule)?;

    if args.dry_run {
        for name in &candidates {
            println!("Would drop table: {name}");
        }
        let count = candidates.len();
        let noun = if count == 1 {
            "matching table"
        } else {
            "matching tables"
        };
        println!("{rule}: {count} {noun} (dry run, nothing dropped).");
        return Ok(());
    }

    for name in &candidates {
        println!("Dropping table: {name}");
    }
    let dropped = pruner::prune_tables(&mut conn, &candidates)?;
    info!(dropped, "prune complete");

    println!("{} matching tables have been dropped.", rule.label());
    Ok(())
}
