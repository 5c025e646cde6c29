//! Single-connection SQLite access.
//!
//! The pruner owns exactly one connection for its lifetime; there is no
//! pooling and no sharing. The connection closes when the handle drops.

use diesel::prelude::*;
use diesel::SqliteConnection;
use std::path::Path;

use crate::error::{Error, Result};

/// Open a connection to an existing database file.
///
/// SQLite would happily create a missing file; a pruner has no business
/// doing that, so a missing path is a connection error. `:memory:` is
/// allowed for tests.
///
/// # Errors
/// Returns [`Error::Connection`] if the file does not exist or the
/// connection cannot be established.
pub fn connect(database_url: &str) -> Result<SqliteConnection> {
    if database_url != ":memory:" && !Path::new(database_url).exists() {
        return Err(Error::Connection(format!(
            "database file not found: {database_url}"
        )));
    }

    let mut conn = SqliteConnection::establish(database_url)?;
    diesel::sql_query("PRAGMA busy_timeout=5000")
        .execute(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(conn)
}

/// Toggle foreign-key enforcement for this connection.
///
/// SQLite ignores the pragma inside a transaction, so callers must toggle
/// it outside any transaction scope.
pub fn set_foreign_keys(conn: &mut SqliteConnection, enabled: bool) -> Result<()> {
    let pragma = if enabled {
        "PRAGMA foreign_keys = ON"
    } else {
        "PRAGMA foreign_keys = OFF"
    };
    diesel::sql_query(pragma)
        .execute(conn)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_with_memory_db() {
        let conn = connect(":memory:");
        assert!(conn.is_ok());
    }

    #[test]
    fn connect_missing_file_is_an_error() {
        let result = connect("/nonexistent/deeply/nested/dailyDB.sqlite");
        assert!(matches!(result, Err(Error::Connection(_))));
    }

    #[test]
    fn connect_does_not_create_the_file() {
        let path = std::env::temp_dir().join("stkprune-db-test-should-not-exist.sqlite");
        let _ = std::fs::remove_file(&path);

        let result = connect(&path.display().to_string());
        assert!(result.is_err());
        assert!(!path.exists(), "connect must not create the database file");
    }

    #[test]
    fn foreign_keys_can_be_toggled() {
        let mut conn = connect(":memory:").unwrap();
        assert!(set_foreign_keys(&mut conn, false).is_ok());
        assert!(set_foreign_keys(&mut conn, true).is_ok());
    }
}
