//! Integration tests for command handlers

use acc_bball::{
    commands::{exercise::handle_exercise, load_data::handle_load, open_store, resolve_db_path},
    DB_ENV_VAR,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sample_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn test_resolve_db_path_from_option() {
    let path = resolve_db_path(Some(PathBuf::from("acc.db"))).unwrap();
    assert_eq!(path, PathBuf::from("acc.db"));
}

#[test]
fn test_resolve_db_path_from_env_then_default() {
    // Single test so no other test observes the env var mid-change
    std::env::set_var(DB_ENV_VAR, "/tmp/from-env.db");
    let path = resolve_db_path(None).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/from-env.db"));

    std::env::remove_var(DB_ENV_VAR);
    if let Ok(path) = resolve_db_path(None) {
        assert!(path.ends_with("acc-bball/bball.db"));
    }
}

#[test]
fn test_handle_load_sample_data() {
    let dir = TempDir::new().unwrap();
    let store = open_store(Some(dir.path().join("bball.db"))).unwrap();

    assert!(handle_load(&store, &sample_data_dir()).is_ok());
}

#[test]
fn test_exercise_on_sample_data() {
    let dir = TempDir::new().unwrap();
    let store = open_store(Some(dir.path().join("bball.db"))).unwrap();

    let counts = handle_exercise(&store, &sample_data_dir(), false).unwrap();
    assert_eq!(counts.query1, 6);
    assert_eq!(counts.query2, 1);
    assert_eq!(counts.query3, 4);
    assert_eq!(counts.query4, 4);
    assert_eq!(counts.query5, 13);

    let again = handle_exercise(&store, &sample_data_dir(), true).unwrap();
    assert_eq!(again, counts);
}
