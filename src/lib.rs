//! stkprune - prune generated stock-quote tables from a SQLite database.
//!
//! The daily-quote database of the stock scanner holds one table per
//! instrument, named `stk<code>`. Warrant listings leak junk tables whose
//! names match two known shapes; this crate finds and drops them.
//!
//! # Modules
//!
//! - [`rule`] - The two table-name selection rules
//! - [`pruner`] - Catalog scan and the destructive drop loop
//! - [`db`] - Single-connection SQLite access
//! - [`config`] - Configuration loading from TOML files
//! - [`cli`] - Command-line surface (`prune`, `list`, `check`)
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use stkprune::{db, pruner, rule::SelectionRule};
//!
//! # fn main() -> stkprune::error::Result<()> {
//! let mut conn = db::connect("dailyDB.sqlite")?;
//! let candidates = pruner::select_candidates(&mut conn, SelectionRule::Type1)?;
//! pruner::prune_tables(&mut conn, &candidates)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod pruner;
pub mod rule;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
