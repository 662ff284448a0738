//! Table definitions and schema (re)creation

use anyhow::Result;
use rusqlite::Connection;
use std::time::Duration;

/// A table known to the schema, with the DDL that creates it.
pub struct TableDef {
    pub name: &'static str,
    pub create_sql: &'static str,
}

/// All tables, in dependency order: every table only references tables
/// listed before it. Drops run in reverse.
pub const TABLES: &[TableDef] = &[
    TableDef {
        name: "state",
        create_sql: "CREATE TABLE state (
            state_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
    },
    TableDef {
        name: "color",
        create_sql: "CREATE TABLE color (
            color_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
    },
    TableDef {
        name: "team",
        create_sql: "CREATE TABLE team (
            team_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            state_id INTEGER NOT NULL REFERENCES state(state_id),
            color_id INTEGER NOT NULL REFERENCES color(color_id),
            wins INTEGER NOT NULL CHECK (wins >= 0),
            losses INTEGER NOT NULL CHECK (losses >= 0)
        )",
    },
    TableDef {
        name: "player",
        create_sql: "CREATE TABLE player (
            player_id INTEGER PRIMARY KEY AUTOINCREMENT,
            team_id INTEGER NOT NULL REFERENCES team(team_id),
            uniform_num INTEGER NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            mpg INTEGER NOT NULL,
            ppg INTEGER NOT NULL,
            rpg INTEGER NOT NULL,
            apg INTEGER NOT NULL,
            spg REAL NOT NULL,
            bpg REAL NOT NULL
        )",
    },
];

/// Indexes on the foreign-key columns used by the query joins.
const INDEXES: &[&str] = &[
    "CREATE INDEX idx_team_state ON team(state_id)",
    "CREATE INDEX idx_team_color ON team(color_id)",
    "CREATE INDEX idx_player_team ON player(team_id)",
];

/// Enable per-connection settings every pooled connection needs.
pub(crate) fn apply_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.busy_timeout(Duration::from_secs(5))
}

/// Drop every known table, then recreate them all.
///
/// Runs in a single transaction so a failure leaves the previous schema in
/// place.
pub(crate) fn recreate_schema(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;

    for table in TABLES.iter().rev() {
        tx.execute(&format!("DROP TABLE IF EXISTS {}", table.name), [])?;
    }

    for table in TABLES {
        tx.execute(table.create_sql, [])?;
    }

    for index in INDEXES {
        tx.execute(index, [])?;
    }

    tx.commit()?;
    Ok(())
}

/// Names of user tables currently present, sorted.
pub fn existing_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}
