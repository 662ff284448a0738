//! Integration tests for the canned queries over the sample dataset

use acc_bball::{
    loader::load_all_data,
    query::{
        render_table, run_query1, run_query2, run_query3, run_query4, run_query5,
        PlayerStatFilter,
    },
    Store, StoreConfig,
};
use std::path::Path;
use tempfile::TempDir;

fn loaded_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(&StoreConfig::new(dir.path().join("bball.db"))).unwrap();
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    assert!(load_all_data(&store, data).unwrap().all_loaded());
    (dir, store)
}

#[test]
fn test_query1_mpg_window() {
    let (_dir, store) = loaded_store();

    let rows = run_query1(&store, &PlayerStatFilter::new().mpg(35, 37)).unwrap();
    let mut mpgs: Vec<i64> = rows.iter().map(|p| p.mpg).collect();
    mpgs.sort();
    assert_eq!(mpgs, vec![35, 35, 36, 36, 37]);

    let outside = run_query1(&store, &PlayerStatFilter::new().mpg(39, 40)).unwrap();
    assert!(outside.is_empty());
}

#[test]
fn test_query1_matches_manual_filter() {
    let (_dir, store) = loaded_store();

    let everyone = run_query1(&store, &PlayerStatFilter::new()).unwrap();
    let filter = PlayerStatFilter::new().ppg(15, 20).spg(0.8, 1.8);
    let rows = run_query1(&store, &filter).unwrap();

    let expected: Vec<_> = everyone
        .into_iter()
        .filter(|p| (15..=20).contains(&p.ppg) && p.spg >= 0.8 && p.spg <= 1.8)
        .collect();
    assert_eq!(rows, expected);
    assert!(!rows.is_empty());
}

#[test]
fn test_query2_orange_teams() {
    let (_dir, store) = loaded_store();

    let mut names: Vec<String> = run_query2(&store, "Orange")
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Clemson", "Syracuse", "Virginia"]);
}

#[test]
fn test_query3_ppg_non_increasing() {
    let (_dir, store) = loaded_store();

    let names = run_query3(&store, "UNC").unwrap();
    assert_eq!(names.len(), 6);

    let everyone = run_query1(&store, &PlayerStatFilter::new()).unwrap();
    let ppg_of = |first: &str, last: &str| {
        everyone
            .iter()
            .find(|p| p.first_name == first && p.last_name == last)
            .map(|p| p.ppg)
            .unwrap()
    };
    let ppgs: Vec<i64> = names
        .iter()
        .map(|n| ppg_of(&n.first_name, &n.last_name))
        .collect();
    assert!(ppgs.windows(2).all(|w| w[0] >= w[1]), "{:?}", ppgs);
    assert_eq!(names[0].last_name, "Hansbrough");
}

#[test]
fn test_query4_state_and_color() {
    let (_dir, store) = loaded_store();

    let mut rows = run_query4(&store, "NC", "DarkBlue").unwrap();
    rows.sort_by_key(|p| p.uniform_num);
    let numbers: Vec<i64> = rows.iter().map(|r| r.uniform_num).collect();
    assert_eq!(numbers, vec![1, 5, 11, 32]);
}

#[test]
fn test_query5_excludes_teams_at_threshold() {
    let (_dir, store) = loaded_store();

    // Miami and NotreDame sit exactly on the threshold
    let rows = run_query5(&store, 11).unwrap();
    assert!(rows.iter().all(|r| r.wins > 11));
    assert!(rows.iter().all(|r| r.team_name != "Miami" && r.team_name != "NotreDame"));
    assert!(rows.iter().any(|r| r.team_name == "Louisville"));
}

#[test]
fn test_rendered_table_uses_one_decimal_place() {
    let (_dir, store) = loaded_store();

    let rows = run_query1(&store, &PlayerStatFilter::new().bpg(3.0, 3.0)).unwrap();
    let text = render_table(&rows);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("Ralph Sampson 34 21 12 2 0.6 3.0"));
}
