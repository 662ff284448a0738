//! Data models for the storage layer

use crate::cli::types::{ColorId, PlayerId, StateId, TeamId};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A state that teams play in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub state_id: StateId,
    pub name: String,
}

/// A uniform color worn by teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub color_id: ColorId,
    pub name: String,
}

/// A team, belonging to one state and wearing one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub state_id: StateId,
    pub color_id: ColorId,
    pub wins: i64,
    pub losses: i64,
}

/// A player row as stored, including the store-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub uniform_num: i64,
    pub first_name: String,
    pub last_name: String,
    pub mpg: i64,
    pub ppg: i64,
    pub rpg: i64,
    pub apg: i64,
    pub spg: f64,
    pub bpg: f64,
}

/// A player awaiting insert. The store assigns `player_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub team_id: TeamId,
    pub uniform_num: i64,
    pub first_name: String,
    pub last_name: String,
    pub mpg: i64,
    pub ppg: i64,
    pub rpg: i64,
    pub apg: i64,
    pub spg: f64,
    pub bpg: f64,
}

// Column lists below must stay in sync with the row mappers.

pub(crate) const STATE_COLUMNS: &str = "state_id, name";
pub(crate) const COLOR_COLUMNS: &str = "color_id, name";
pub(crate) const TEAM_COLUMNS: &str = "team_id, name, state_id, color_id, wins, losses";
pub(crate) const PLAYER_COLUMNS: &str =
    "player_id, team_id, uniform_num, first_name, last_name, mpg, ppg, rpg, apg, spg, bpg";

impl State {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            state_id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}

impl Color {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            color_id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}

impl Team {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            team_id: row.get(0)?,
            name: row.get(1)?,
            state_id: row.get(2)?,
            color_id: row.get(3)?,
            wins: row.get(4)?,
            losses: row.get(5)?,
        })
    }
}

impl Player {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            player_id: row.get(0)?,
            team_id: row.get(1)?,
            uniform_num: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
            mpg: row.get(5)?,
            ppg: row.get(6)?,
            rpg: row.get(7)?,
            apg: row.get(8)?,
            spg: row.get(9)?,
            bpg: row.get(10)?,
        })
    }
}
