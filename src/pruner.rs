//! Catalog scan and the destructive drop loop.
//!
//! The two operations here are deliberately separate: `select_candidates`
//! is a read-only catalog scan, `prune_tables` is the irreversible part.
//! Callers decide what goes in between (confirmation, dry-run printing).

use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::db;
use crate::error::{Error, Result};
use crate::rule::SelectionRule;

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// List every user table in the catalog, in catalog order.
///
/// Internal `sqlite_*` tables are never reported.
pub fn list_tables(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let rows: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
    )
    .load(conn)
    .map_err(|e| Error::Database(e.to_string()))?;

    Ok(rows.into_iter().map(|t| t.name).collect())
}

/// Scan the catalog and return the table names the rule selects.
///
/// Read-only; order follows the catalog query and is not guaranteed stable.
pub fn select_candidates(
    conn: &mut SqliteConnection,
    rule: SelectionRule,
) -> Result<Vec<String>> {
    let candidates: Vec<String> = list_tables(conn)?
        .into_iter()
        .filter(|name| rule.matches(name))
        .collect();

    debug!(rule = %rule, count = candidates.len(), "selected prune candidates");
    Ok(candidates)
}

/// Drop the named tables and return how many were dropped.
///
/// Foreign-key enforcement is disabled around the drop loop and restored on
/// every exit path. All drops run in one transaction: either every table is
/// gone and the transaction commits, or a failure rolls all of them back.
/// An empty candidate list still commits and succeeds.
pub fn prune_tables(conn: &mut SqliteConnection, names: &[String]) -> Result<usize> {
    db::set_foreign_keys(conn, false)?;

    let result = conn.transaction::<_, Error, _>(|conn| {
        for name in names {
            info!(table = %name, "dropping table");
            diesel::sql_query(format!("DROP TABLE IF EXISTS {}", quote_ident(name)))
                .execute(conn)?;
        }
        Ok(names.len())
    });

    let restore = db::set_foreign_keys(conn, true);

    let dropped = result?;
    restore?;
    Ok(dropped)
}

/// Double-quote an identifier that came out of the catalog.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
