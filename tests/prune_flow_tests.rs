//! End-to-end flow against a file-backed database via the library API.

use stkprune::rule::SelectionRule;
use stkprune::testkit::{file_db_with_tables, table_names};
use stkprune::{db, pruner};
use tempfile::TempDir;

#[test]
fn prune_commits_across_connections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dailyDB.sqlite");
    file_db_with_tables(&path, &["stk7123U", "stk7456U", "stk7123", "stk2330"]);
    let url = path.display().to_string();

    {
        let mut conn = db::connect(&url).unwrap();
        let candidates = pruner::select_candidates(&mut conn, SelectionRule::Type1).unwrap();
        assert_eq!(candidates.len(), 2);
        let dropped = pruner::prune_tables(&mut conn, &candidates).unwrap();
        assert_eq!(dropped, 2);
    }

    // A fresh connection sees the committed catalog.
    assert_eq!(
        table_names(&path),
        vec!["stk7123".to_string(), "stk2330".to_string()]
    );
}

#[test]
fn select_on_empty_database_finds_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dailyDB.sqlite");
    file_db_with_tables(&path, &[]);

    let mut conn = db::connect(&path.display().to_string()).unwrap();
    let candidates = pruner::select_candidates(&mut conn, SelectionRule::Type2).unwrap();
    assert!(candidates.is_empty());

    // Still a successful, committing no-op.
    assert_eq!(pruner::prune_tables(&mut conn, &candidates).unwrap(), 0);
}

#[test]
fn rules_leave_each_others_targets_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dailyDB.sqlite");
    // stk7123U: type1 only. stk123457: type2 only. stk71234U: both.
    file_db_with_tables(&path, &["stk7123U", "stk123457", "stk71234U"]);
    let url = path.display().to_string();

    let mut conn = db::connect(&url).unwrap();
    let candidates = pruner::select_candidates(&mut conn, SelectionRule::Type1).unwrap();
    assert_eq!(
        candidates,
        vec!["stk7123U".to_string(), "stk71234U".to_string()]
    );
    pruner::prune_tables(&mut conn, &candidates).unwrap();
    drop(conn);

    assert_eq!(table_names(&path), vec!["stk123457".to_string()]);
}
