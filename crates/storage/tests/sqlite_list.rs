#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use todo_core::{ListError, MatchMode, TodoId, TodoList};
use todo_storage::SqliteList;

fn temp_db_path(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic enough for tests")
        .as_nanos();
    path.push(format!("todo-storage-{label}-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&path).expect("temp dir must be creatable");
    path.push("todos.db");
    path
}

#[test]
fn add_then_get_round_trips_exactly() {
    let mut list = SqliteList::open_in_memory().expect("open");

    let added = list.add("  buy milk ").expect("add");
    assert_eq!(added.description, "buy milk");
    assert!(!added.complete);
    assert_eq!(added.rank, added.created_at_ms);

    let fetched = list.get(added.id).expect("get");
    assert_eq!(fetched, added);

    let todos = list.todos().expect("todos");
    assert_eq!(todos, vec![added]);
}

#[test]
fn rows_survive_reopening_the_same_file() {
    let db_path = temp_db_path("durability");

    let added = {
        let mut list = SqliteList::open(&db_path).expect("open fresh");
        list.add("persist me").expect("add")
    };

    let list = SqliteList::open(&db_path).expect("reopen");
    let fetched = list.get(added.id).expect("get after reopen");
    assert_eq!(fetched, added);
}

#[test]
fn add_assigns_monotonic_default_ranks() {
    let mut list = SqliteList::open_in_memory().expect("open");

    let first = list.add("first").expect("add first");
    let second = list.add("second").expect("add second");
    assert!(second.rank >= first.rank);
}

#[test]
fn rename_updates_description_and_timestamp_only() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let added = list.add("old name").expect("add");

    let renamed = list.rename(added.id, " new name ").expect("rename");
    assert_eq!(renamed.id, added.id);
    assert_eq!(renamed.description, "new name");
    assert_eq!(renamed.created_at_ms, added.created_at_ms);
    assert!(renamed.updated_at_ms >= added.updated_at_ms);
    assert_eq!(renamed.rank, added.rank);
    assert_eq!(renamed.complete, added.complete);
}

#[test]
fn rename_accepts_empty_name_at_service_level() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let added = list.add("something").expect("add");

    let renamed = list.rename(added.id, "   ").expect("rename");
    assert_eq!(renamed.description, "");
}

#[test]
fn toggle_done_is_its_own_inverse() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let added = list.add("task").expect("add");

    let toggled = list.toggle_done(added.id).expect("first toggle");
    assert!(toggled.complete);
    assert!(list.get(added.id).expect("get").complete);

    let toggled = list.toggle_done(added.id).expect("second toggle");
    assert!(!toggled.complete);
    assert!(!list.get(added.id).expect("get").complete);
}

#[test]
fn delete_removes_the_row() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let keep = list.add("keep").expect("add keep");
    let gone = list.add("gone").expect("add gone");

    list.delete(gone.id).expect("delete");

    let err = list.get(gone.id).expect_err("get after delete");
    assert!(err.is_not_found());
    let ids: Vec<_> = list.todos().expect("todos").iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![keep.id]);
}

#[test]
fn missing_ids_report_not_found_everywhere() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let absent = TodoId::new();

    assert!(list.get(absent).expect_err("get").is_not_found());
    assert!(list.rename(absent, "x").expect_err("rename").is_not_found());
    assert!(list.toggle_done(absent).expect_err("toggle").is_not_found());
    assert!(list.delete(absent).expect_err("delete").is_not_found());
}

#[test]
fn reorder_assigns_positions_and_keeps_unmentioned_rows() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let a = list.add("a").expect("add a");
    let b = list.add("b").expect("add b");
    let c = list.add("c").expect("add c");

    list.reorder(&[b.id.to_string(), a.id.to_string()])
        .expect("reorder");

    let todos = list.todos().expect("todos");
    let ids: Vec<_> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![b.id, a.id, c.id]);
    assert_eq!(todos[0].rank, 0);
    assert_eq!(todos[1].rank, 1);
    // Unmentioned row keeps its creation-time rank untouched.
    assert_eq!(todos[2].rank, c.rank);
}

#[test]
fn reorder_with_malformed_id_changes_nothing() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let a = list.add("a").expect("add a");
    let b = list.add("b").expect("add b");

    let err = list
        .reorder(&[a.id.to_string(), "garbage".to_string()])
        .expect_err("malformed id must fail");
    assert!(matches!(err, ListError::InvalidId(value) if value == "garbage"));

    // Atomic: no rank was written before the failure surfaced.
    assert_eq!(list.get(a.id).expect("get a").rank, a.rank);
    assert_eq!(list.get(b.id).expect("get b").rank, b.rank);
}

#[test]
fn reorder_ignores_ids_that_are_not_stored() {
    let mut list = SqliteList::open_in_memory().expect("open");
    let a = list.add("a").expect("add a");
    let phantom = TodoId::new();

    list.reorder(&[phantom.to_string(), a.id.to_string()])
        .expect("reorder with unknown id");

    // `a` took its position in the sequence; the unknown id is simply
    // not present to update.
    assert_eq!(list.get(a.id).expect("get a").rank, 1);
}

#[test]
fn search_substring_matches_anywhere_case_insensitively() {
    let mut list = SqliteList::open_in_memory().expect("open");
    list.add("React course").expect("add");
    list.add("Write spec").expect("add");
    list.add("Reactor design").expect("add");

    let hits = list.search("react").expect("search");
    let mut descriptions: Vec<_> = hits.iter().map(|t| t.description.as_str()).collect();
    descriptions.sort_unstable();
    assert_eq!(descriptions, vec!["React course", "Reactor design"]);
}

#[test]
fn search_prefix_matches_only_the_start() {
    let db_path = temp_db_path("prefix-search");
    let mut list = SqliteList::open_with_mode(&db_path, MatchMode::Prefix).expect("open");
    list.add("React course").expect("add");
    list.add("Big reactor").expect("add");

    let hits = list.search("react").expect("search");
    let descriptions: Vec<_> = hits.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["React course"]);
}

#[test]
fn empty_clears_the_table() {
    let mut list = SqliteList::open_in_memory().expect("open");
    list.add("a").expect("add");
    list.add("b").expect("add");

    list.empty().expect("empty");
    assert!(list.todos().expect("todos").is_empty());
}
