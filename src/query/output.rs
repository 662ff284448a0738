//! Plain-text table output for query results.
//!
//! One header line of space-separated column names, then one line per row.
//! Floating-point statistics are printed with one decimal place.

use crate::storage::Player;
use serde::Serialize;
use std::io::{self, Write};

/// A query result row that can be printed as one line of a table.
pub trait Tabular {
    /// Space-separated column names.
    const HEADER: &'static str;

    fn render(&self) -> String;
}

/// Write the header and every row to `out`.
pub fn print_table<W: Write, R: Tabular>(out: &mut W, rows: &[R]) -> io::Result<()> {
    writeln!(out, "{}", R::HEADER)?;
    for row in rows {
        writeln!(out, "{}", row.render())?;
    }
    Ok(())
}

/// Render a table to a string.
pub fn render_table<R: Tabular>(rows: &[R]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(R::HEADER.to_string());
    lines.extend(rows.iter().map(Tabular::render));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

impl Tabular for Player {
    const HEADER: &'static str =
        "PLAYER_ID TEAM_ID UNIFORM_NUM FIRST_NAME LAST_NAME MPG PPG RPG APG SPG BPG";

    fn render(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {:.1} {:.1}",
            self.player_id,
            self.team_id,
            self.uniform_num,
            self.first_name,
            self.last_name,
            self.mpg,
            self.ppg,
            self.rpg,
            self.apg,
            self.spg,
            self.bpg
        )
    }
}

/// Query 2 row: a team name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamName {
    pub name: String,
}

impl Tabular for TeamName {
    const HEADER: &'static str = "NAME";

    fn render(&self) -> String {
        self.name.clone()
    }
}

/// Query 3 row: a player's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerName {
    pub first_name: String,
    pub last_name: String,
}

impl Tabular for PlayerName {
    const HEADER: &'static str = "FIRST_NAME LAST_NAME";

    fn render(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Query 4 row: uniform number and name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformPlayer {
    pub uniform_num: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Tabular for UniformPlayer {
    const HEADER: &'static str = "UNIFORM_NUM FIRST_NAME LAST_NAME";

    fn render(&self) -> String {
        format!("{} {} {}", self.uniform_num, self.first_name, self.last_name)
    }
}

/// Query 5 row: a player with their team's name and wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinningPlayer {
    pub first_name: String,
    pub last_name: String,
    pub team_name: String,
    pub wins: i64,
}

impl Tabular for WinningPlayer {
    const HEADER: &'static str = "FIRST_NAME LAST_NAME NAME WINS";

    fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            self.first_name, self.last_name, self.team_name, self.wins
        )
    }
}
