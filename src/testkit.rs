//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests). The scanner application normally creates the
//! daily-quote tables; these helpers stand in for it.

use diesel::prelude::*;
use diesel::SqliteConnection;

/// Create a daily-quote table with the scanner's schema.
///
/// # Panics
/// Panics on SQL failure; test-only code.
pub fn create_quote_table(conn: &mut SqliteConnection, name: &str) {
    let quoted = format!("\"{}\"", name.replace('"', "\"\""));
    diesel::sql_query(format!(
        "CREATE TABLE {quoted} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL DEFAULT 0,
            month INTEGER NOT NULL DEFAULT 0,
            day INTEGER NOT NULL DEFAULT 0,
            close REAL NOT NULL DEFAULT 0.0
        )"
    ))
    .execute(conn)
    .expect("create quote table");
}

/// In-memory database pre-populated with the given tables.
pub fn memory_db_with_tables(names: &[&str]) -> SqliteConnection {
    let mut conn = crate::db::connect(":memory:").expect("open in-memory database");
    for name in names {
        create_quote_table(&mut conn, name);
    }
    conn
}

/// File-backed database pre-populated with the given tables.
///
/// Creates the file; intended for CLI tests that need a real path.
pub fn file_db_with_tables(path: &std::path::Path, names: &[&str]) {
    let mut conn =
        SqliteConnection::establish(&path.display().to_string()).expect("create database file");
    for name in names {
        create_quote_table(&mut conn, name);
    }
}

/// Table names currently in the database file, in catalog order.
pub fn table_names(path: &std::path::Path) -> Vec<String> {
    let mut conn =
        SqliteConnection::establish(&path.display().to_string()).expect("open database file");
    crate::pruner::list_tables(&mut conn).expect("list tables")
}
