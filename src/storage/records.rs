//! Row-level inserts and relationship navigation
//!
//! Implemented on [`Connection`], so every method is callable on a
//! [`UnitOfWork`](super::UnitOfWork) or an open `Transaction` through deref.

use super::models::*;
use crate::cli::types::{ColorId, PlayerId, StateId, TeamId};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Inserts and navigation over the four entity tables.
pub trait Records {
    fn add_state(&self, state: &State) -> Result<()>;
    fn add_color(&self, color: &Color) -> Result<()>;
    fn add_team(&self, team: &Team) -> Result<()>;
    /// Insert a player and return the id the store assigned.
    fn add_player(&self, player: &NewPlayer) -> Result<PlayerId>;

    fn state_of_team(&self, team_id: TeamId) -> Result<Option<State>>;
    fn teams_in_state(&self, state_id: StateId) -> Result<Vec<Team>>;
    fn color_of_team(&self, team_id: TeamId) -> Result<Option<Color>>;
    fn teams_with_color(&self, color_id: ColorId) -> Result<Vec<Team>>;
    fn team_of_player(&self, player_id: PlayerId) -> Result<Option<Team>>;
    fn players_on_team(&self, team_id: TeamId) -> Result<Vec<Player>>;

    /// Row count of one of the schema tables.
    fn count_rows(&self, table: &str) -> Result<i64>;
}

impl Records for Connection {
    fn add_state(&self, state: &State) -> Result<()> {
        self.execute(
            "INSERT INTO state (state_id, name) VALUES (?, ?)",
            params![state.state_id, state.name],
        )?;
        Ok(())
    }

    fn add_color(&self, color: &Color) -> Result<()> {
        self.execute(
            "INSERT INTO color (color_id, name) VALUES (?, ?)",
            params![color.color_id, color.name],
        )?;
        Ok(())
    }

    fn add_team(&self, team: &Team) -> Result<()> {
        self.execute(
            "INSERT INTO team (team_id, name, state_id, color_id, wins, losses)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                team.team_id,
                team.name,
                team.state_id,
                team.color_id,
                team.wins,
                team.losses
            ],
        )?;
        Ok(())
    }

    fn add_player(&self, player: &NewPlayer) -> Result<PlayerId> {
        self.execute(
            "INSERT INTO player
             (team_id, uniform_num, first_name, last_name, mpg, ppg, rpg, apg, spg, bpg)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                player.team_id,
                player.uniform_num,
                player.first_name,
                player.last_name,
                player.mpg,
                player.ppg,
                player.rpg,
                player.apg,
                player.spg,
                player.bpg
            ],
        )?;
        Ok(PlayerId::new(self.last_insert_rowid()))
    }

    fn state_of_team(&self, team_id: TeamId) -> Result<Option<State>> {
        let state = self
            .query_row(
                "SELECT s.state_id, s.name
                 FROM state s JOIN team t ON t.state_id = s.state_id
                 WHERE t.team_id = ?",
                params![team_id],
                State::from_row,
            )
            .optional()?;
        Ok(state)
    }

    fn teams_in_state(&self, state_id: StateId) -> Result<Vec<Team>> {
        let mut stmt = self.prepare(&format!(
            "SELECT {} FROM team WHERE state_id = ? ORDER BY team_id",
            TEAM_COLUMNS
        ))?;
        let teams = stmt
            .query_map(params![state_id], Team::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teams)
    }

    fn color_of_team(&self, team_id: TeamId) -> Result<Option<Color>> {
        let color = self
            .query_row(
                "SELECT c.color_id, c.name
                 FROM color c JOIN team t ON t.color_id = c.color_id
                 WHERE t.team_id = ?",
                params![team_id],
                Color::from_row,
            )
            .optional()?;
        Ok(color)
    }

    fn teams_with_color(&self, color_id: ColorId) -> Result<Vec<Team>> {
        let mut stmt = self.prepare(&format!(
            "SELECT {} FROM team WHERE color_id = ? ORDER BY team_id",
            TEAM_COLUMNS
        ))?;
        let teams = stmt
            .query_map(params![color_id], Team::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teams)
    }

    fn team_of_player(&self, player_id: PlayerId) -> Result<Option<Team>> {
        let team = self
            .query_row(
                "SELECT t.team_id, t.name, t.state_id, t.color_id, t.wins, t.losses
                 FROM team t JOIN player p ON p.team_id = t.team_id
                 WHERE p.player_id = ?",
                params![player_id],
                Team::from_row,
            )
            .optional()?;
        Ok(team)
    }

    fn players_on_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        let mut stmt = self.prepare(&format!(
            "SELECT {} FROM player WHERE team_id = ? ORDER BY player_id",
            PLAYER_COLUMNS
        ))?;
        let players = stmt
            .query_map(params![team_id], Player::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(players)
    }

    fn count_rows(&self, table: &str) -> Result<i64> {
        if !super::schema::TABLES.iter().any(|t| t.name == table) {
            anyhow::bail!("unknown table: {}", table);
        }
        let count = self.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }
}

/// Look up a single state by id.
pub fn find_state(conn: &Connection, state_id: StateId) -> Result<Option<State>> {
    let state = conn
        .query_row(
            &format!("SELECT {} FROM state WHERE state_id = ?", STATE_COLUMNS),
            params![state_id],
            State::from_row,
        )
        .optional()?;
    Ok(state)
}

/// Look up a single color by id.
pub fn find_color(conn: &Connection, color_id: ColorId) -> Result<Option<Color>> {
    let color = conn
        .query_row(
            &format!("SELECT {} FROM color WHERE color_id = ?", COLOR_COLUMNS),
            params![color_id],
            Color::from_row,
        )
        .optional()?;
    Ok(color)
}

/// Look up a single team by id.
pub fn find_team(conn: &Connection, team_id: TeamId) -> Result<Option<Team>> {
    let team = conn
        .query_row(
            &format!("SELECT {} FROM team WHERE team_id = ?", TEAM_COLUMNS),
            params![team_id],
            Team::from_row,
        )
        .optional()?;
    Ok(team)
}

/// Every stored player, in insertion order.
pub fn all_players(conn: &Connection) -> Result<Vec<Player>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM player ORDER BY player_id",
        PLAYER_COLUMNS
    ))?;
    let players = stmt
        .query_map([], Player::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(players)
}
