//! The five canned queries over the loaded dataset.
//!
//! Every query checks out its own unit-of-work, runs one parameterized
//! statement, and releases the connection before returning. `run_queryN`
//! returns the rows; `queryN` also prints them to stdout as a table. Store
//! errors are returned to the caller unchanged.

pub mod filter;
pub mod output;


use crate::storage::models::PLAYER_COLUMNS;
use crate::storage::{Player, Store};
use crate::Result;
use rusqlite::{params, params_from_iter};
use std::io;

pub use filter::PlayerStatFilter;
pub use output::{print_table, render_table, PlayerName, Tabular, TeamName, UniformPlayer, WinningPlayer};

/// Players whose statistics fall inside every enabled range, bounds included.
pub fn run_query1(store: &Store, filter: &PlayerStatFilter) -> Result<Vec<Player>> {
    let uow = store.open_unit_of_work()?;
    let (where_clause, bound) = filter.where_clause();
    let sql = format!(
        "SELECT {} FROM player {} ORDER BY player_id",
        PLAYER_COLUMNS, where_clause
    );

    let mut stmt = uow.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(bound), Player::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Names of teams whose uniform color is exactly `team_color`.
pub fn run_query2(store: &Store, team_color: &str) -> Result<Vec<TeamName>> {
    let uow = store.open_unit_of_work()?;
    let mut stmt = uow.prepare(
        "SELECT t.name
         FROM team t JOIN color c ON t.color_id = c.color_id
         WHERE c.name = ?",
    )?;
    let rows = stmt
        .query_map(params![team_color], |row| {
            Ok(TeamName { name: row.get(0)? })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Players on `team_name`, highest points per game first.
pub fn run_query3(store: &Store, team_name: &str) -> Result<Vec<PlayerName>> {
    let uow = store.open_unit_of_work()?;
    let mut stmt = uow.prepare(
        "SELECT p.first_name, p.last_name
         FROM player p JOIN team t ON p.team_id = t.team_id
         WHERE t.name = ?
         ORDER BY p.ppg DESC",
    )?;
    let rows = stmt
        .query_map(params![team_name], |row| {
            Ok(PlayerName {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Players on teams located in `team_state` that wear `team_color`.
pub fn run_query4(store: &Store, team_state: &str, team_color: &str) -> Result<Vec<UniformPlayer>> {
    let uow = store.open_unit_of_work()?;
    let mut stmt = uow.prepare(
        "SELECT p.uniform_num, p.first_name, p.last_name
         FROM player p
         JOIN team t ON p.team_id = t.team_id
         JOIN state s ON t.state_id = s.state_id
         JOIN color c ON t.color_id = c.color_id
         WHERE s.name = ? AND c.name = ?",
    )?;
    let rows = stmt
        .query_map(params![team_state, team_color], |row| {
            Ok(UniformPlayer {
                uniform_num: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Players on teams with strictly more than `num_wins` wins.
pub fn run_query5(store: &Store, num_wins: i64) -> Result<Vec<WinningPlayer>> {
    let uow = store.open_unit_of_work()?;
    let mut stmt = uow.prepare(
        "SELECT p.first_name, p.last_name, t.name, t.wins
         FROM player p JOIN team t ON p.team_id = t.team_id
         WHERE t.wins > ?",
    )?;
    let rows = stmt
        .query_map(params![num_wins], |row| {
            Ok(WinningPlayer {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                team_name: row.get(2)?,
                wins: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn print_rows<R: Tabular>(rows: &[R]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_table(&mut out, rows)?;
    Ok(())
}

pub fn query1(store: &Store, filter: &PlayerStatFilter) -> Result<Vec<Player>> {
    let rows = run_query1(store, filter)?;
    print_rows(&rows)?;
    Ok(rows)
}

pub fn query2(store: &Store, team_color: &str) -> Result<Vec<TeamName>> {
    let rows = run_query2(store, team_color)?;
    print_rows(&rows)?;
    Ok(rows)
}

pub fn query3(store: &Store, team_name: &str) -> Result<Vec<PlayerName>> {
    let rows = run_query3(store, team_name)?;
    print_rows(&rows)?;
    Ok(rows)
}

pub fn query4(store: &Store, team_state: &str, team_color: &str) -> Result<Vec<UniformPlayer>> {
    let rows = run_query4(store, team_state, team_color)?;
    print_rows(&rows)?;
    Ok(rows)
}

pub fn query5(store: &Store, num_wins: i64) -> Result<Vec<WinningPlayer>> {
    let rows = run_query5(store, num_wins)?;
    print_rows(&rows)?;
    Ok(rows)
}
