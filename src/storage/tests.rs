//! Unit tests for storage functionality

use super::records::{all_players, find_team};
use super::schema::{existing_tables, TABLES};
use super::*;
use crate::cli::types::{ColorId, PlayerId, StateId, TeamId};
use tempfile::TempDir;

fn create_test_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(&StoreConfig::new(dir.path().join("test.db"))).unwrap();
    store.initialize().unwrap();
    (dir, store)
}

fn seed_reference_rows(uow: &UnitOfWork) {
    uow.add_state(&State {
        state_id: StateId::new(5),
        name: "NC".to_string(),
    })
    .unwrap();
    uow.add_color(&Color {
        color_id: ColorId::new(2),
        name: "DarkBlue".to_string(),
    })
    .unwrap();
    uow.add_team(&Team {
        team_id: TeamId::new(7),
        name: "Duke".to_string(),
        state_id: StateId::new(5),
        color_id: ColorId::new(2),
        wins: 15,
        losses: 3,
    })
    .unwrap();
}

fn test_player(team_id: i64, first_name: &str) -> NewPlayer {
    NewPlayer {
        team_id: TeamId::new(team_id),
        uniform_num: 1,
        first_name: first_name.to_string(),
        last_name: "Test".to_string(),
        mpg: 30,
        ppg: 12,
        rpg: 4,
        apg: 3,
        spg: 1.2,
        bpg: 0.4,
    }
}

#[test]
fn test_initialize_creates_all_tables() {
    let (_dir, store) = create_test_store();
    let uow = store.open_unit_of_work().unwrap();

    let tables = existing_tables(&uow).unwrap();
    for table in TABLES {
        assert!(tables.iter().any(|t| t == table.name), "missing {}", table.name);
    }
}

#[test]
fn test_initialize_discards_existing_rows() {
    let (_dir, store) = create_test_store();
    {
        let uow = store.open_unit_of_work().unwrap();
        seed_reference_rows(&uow);
        assert_eq!(uow.count_rows("team").unwrap(), 1);
    }

    store.initialize().unwrap();

    let uow = store.open_unit_of_work().unwrap();
    for table in TABLES {
        assert_eq!(uow.count_rows(table.name).unwrap(), 0);
    }
}

#[test]
fn test_foreign_keys_enforced_on_pooled_connections() {
    let (_dir, store) = create_test_store();
    let uow = store.open_unit_of_work().unwrap();

    let orphan = Team {
        team_id: TeamId::new(1),
        name: "Nowhere".to_string(),
        state_id: StateId::new(99),
        color_id: ColorId::new(99),
        wins: 0,
        losses: 0,
    };
    assert!(uow.add_team(&orphan).is_err());
}

#[test]
fn test_negative_wins_rejected() {
    let (_dir, store) = create_test_store();
    let uow = store.open_unit_of_work().unwrap();
    seed_reference_rows(&uow);

    let team = Team {
        team_id: TeamId::new(8),
        name: "Losers".to_string(),
        state_id: StateId::new(5),
        color_id: ColorId::new(2),
        wins: -1,
        losses: 0,
    };
    assert!(uow.add_team(&team).is_err());
}

#[test]
fn test_add_player_assigns_increasing_ids() {
    let (_dir, store) = create_test_store();
    let uow = store.open_unit_of_work().unwrap();
    seed_reference_rows(&uow);

    let first = uow.add_player(&test_player(7, "Alpha")).unwrap();
    let second = uow.add_player(&test_player(7, "Beta")).unwrap();
    assert!(second > first);

    let players = all_players(&uow).unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].player_id, first);
    assert_eq!(players[0].spg, 1.2);
}

#[test]
fn test_relationship_navigation_both_directions() {
    let (_dir, store) = create_test_store();
    let uow = store.open_unit_of_work().unwrap();
    seed_reference_rows(&uow);
    let player_id = uow.add_player(&test_player(7, "Alpha")).unwrap();

    let state = uow.state_of_team(TeamId::new(7)).unwrap().unwrap();
    assert_eq!(state.name, "NC");
    let color = uow.color_of_team(TeamId::new(7)).unwrap().unwrap();
    assert_eq!(color.name, "DarkBlue");

    let teams = uow.teams_in_state(StateId::new(5)).unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Duke");
    assert_eq!(uow.teams_with_color(ColorId::new(2)).unwrap(), teams);

    let team = uow.team_of_player(player_id).unwrap().unwrap();
    assert_eq!(team.team_id, TeamId::new(7));
    let roster = uow.players_on_team(TeamId::new(7)).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].first_name, "Alpha");
}

#[test]
fn test_navigation_missing_rows() {
    let (_dir, store) = create_test_store();
    let uow = store.open_unit_of_work().unwrap();

    assert!(uow.state_of_team(TeamId::new(1)).unwrap().is_none());
    assert!(uow.team_of_player(PlayerId::new(1)).unwrap().is_none());
    assert!(uow.players_on_team(TeamId::new(1)).unwrap().is_empty());
    assert!(find_team(&uow, TeamId::new(1)).unwrap().is_none());
}

#[test]
fn test_transaction_dropped_without_commit_rolls_back() {
    let (_dir, store) = create_test_store();
    {
        let mut uow = store.open_unit_of_work().unwrap();
        let tx = uow.transaction().unwrap();
        tx.add_state(&State {
            state_id: StateId::new(1),
            name: "VA".to_string(),
        })
        .unwrap();
    }

    let uow = store.open_unit_of_work().unwrap();
    assert_eq!(uow.count_rows("state").unwrap(), 0);
}

#[test]
fn test_units_of_work_are_independent() {
    let (_dir, store) = create_test_store();
    let first = store.open_unit_of_work().unwrap();
    let second = store.open_unit_of_work().unwrap();

    first
        .add_state(&State {
            state_id: StateId::new(1),
            name: "VA".to_string(),
        })
        .unwrap();

    assert_eq!(second.count_rows("state").unwrap(), 1);
}

#[test]
fn test_count_rows_unknown_table() {
    let (_dir, store) = create_test_store();
    let uow = store.open_unit_of_work().unwrap();
    assert!(uow.count_rows("sqlite_master").is_err());
}

#[test]
fn test_open_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let location = dir.path().join("nested").join("bball.db");
    let store = Store::open(&StoreConfig::new(&location).with_pool_size(2)).unwrap();

    assert!(location.parent().unwrap().is_dir());
    assert_eq!(store.location(), location.as_path());
}
