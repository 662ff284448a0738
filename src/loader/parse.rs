//! Line parsers for the four source files.
//!
//! A line with too few fields parses to `Ok(None)` and is skipped. A line
//! with enough fields but a value that fails numeric coercion is an error,
//! which aborts the whole file.

use super::corrections::corrected_team;
use super::{Entity, LoadError};
use crate::cli::types::{ColorId, StateId, TeamId};
use crate::storage::{Color, NewPlayer, Records, State, Team};
use rusqlite::Connection;
use std::str::FromStr;

pub const TEAM_FIELDS: usize = 6;
pub const PLAYER_FIELDS: usize = 11;

/// A record type that can be read from one line of a source file and
/// staged into the store.
pub trait SourceRecord: Sized {
    const ENTITY: Entity;

    fn parse(line: &str, line_no: usize) -> Result<Option<Self>, LoadError>;

    /// Data corrections to apply between parsing and staging.
    fn correct(self) -> Self {
        self
    }

    fn stage(&self, conn: &Connection) -> anyhow::Result<()>;
}

/// A player row as read from the source file, keeping the source id that
/// the corrections key on.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePlayer {
    pub source_id: i64,
    pub player: NewPlayer,
}

fn field<T: FromStr>(
    value: &str,
    line_no: usize,
    name: &'static str,
) -> Result<T, LoadError> {
    value.parse().map_err(|_| LoadError::Parse {
        line: line_no,
        field: name,
        value: value.to_string(),
    })
}

/// Split `<id> <name...>` where the name is the remainder of the line.
fn split_id_and_name(line: &str) -> Option<(&str, &str)> {
    let (id, name) = line.trim().split_once(char::is_whitespace)?;
    Some((id, name.trim()))
}

impl SourceRecord for State {
    const ENTITY: Entity = Entity::State;

    fn parse(line: &str, line_no: usize) -> Result<Option<Self>, LoadError> {
        let Some((id, name)) = split_id_and_name(line) else {
            return Ok(None);
        };
        Ok(Some(State {
            state_id: StateId::new(field(id, line_no, "state_id")?),
            name: name.to_string(),
        }))
    }

    fn stage(&self, conn: &Connection) -> anyhow::Result<()> {
        conn.add_state(self)
    }
}

impl SourceRecord for Color {
    const ENTITY: Entity = Entity::Color;

    fn parse(line: &str, line_no: usize) -> Result<Option<Self>, LoadError> {
        let Some((id, name)) = split_id_and_name(line) else {
            return Ok(None);
        };
        Ok(Some(Color {
            color_id: ColorId::new(field(id, line_no, "color_id")?),
            name: name.to_string(),
        }))
    }

    fn stage(&self, conn: &Connection) -> anyhow::Result<()> {
        conn.add_color(self)
    }
}

impl SourceRecord for Team {
    const ENTITY: Entity = Entity::Team;

    fn parse(line: &str, line_no: usize) -> Result<Option<Self>, LoadError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < TEAM_FIELDS {
            return Ok(None);
        }
        Ok(Some(Team {
            team_id: TeamId::new(field(fields[0], line_no, "team_id")?),
            name: fields[1].to_string(),
            state_id: StateId::new(field(fields[2], line_no, "state_id")?),
            color_id: ColorId::new(field(fields[3], line_no, "color_id")?),
            wins: field(fields[4], line_no, "wins")?,
            losses: field(fields[5], line_no, "losses")?,
        }))
    }

    fn stage(&self, conn: &Connection) -> anyhow::Result<()> {
        conn.add_team(self)
    }
}

impl SourceRecord for SourcePlayer {
    const ENTITY: Entity = Entity::Player;

    fn parse(line: &str, line_no: usize) -> Result<Option<Self>, LoadError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < PLAYER_FIELDS {
            return Ok(None);
        }
        Ok(Some(SourcePlayer {
            source_id: field(fields[0], line_no, "player_id")?,
            player: NewPlayer {
                team_id: TeamId::new(field(fields[1], line_no, "team_id")?),
                uniform_num: field(fields[2], line_no, "uniform_num")?,
                first_name: fields[3].to_string(),
                last_name: fields[4].to_string(),
                mpg: field(fields[5], line_no, "mpg")?,
                ppg: field(fields[6], line_no, "ppg")?,
                rpg: field(fields[7], line_no, "rpg")?,
                apg: field(fields[8], line_no, "apg")?,
                spg: field(fields[9], line_no, "spg")?,
                bpg: field(fields[10], line_no, "bpg")?,
            },
        }))
    }

    fn correct(mut self) -> Self {
        self.player.team_id = corrected_team(self.source_id, self.player.team_id);
        self
    }

    fn stage(&self, conn: &Connection) -> anyhow::Result<()> {
        conn.add_player(&self.player)?;
        Ok(())
    }
}
