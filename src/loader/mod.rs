//! Bulk loading of the whitespace-delimited source files.
//!
//! Each file is staged in a single transaction: either every parsed row is
//! committed or, on the first coercion or store error, none are. A failed
//! file is logged and reported in its [`LoadReport`]; it never surfaces as
//! an `Err`, so one bad file does not stop the remaining loads.

pub mod corrections;
pub mod parse;


use crate::storage::{Color, State, Store, Team};
use crate::Result;
use parse::{SourcePlayer, SourceRecord};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STATE_FILE: &str = "state.txt";
pub const COLOR_FILE: &str = "color.txt";
pub const TEAM_FILE: &str = "team.txt";
pub const PLAYER_FILE: &str = "player.txt";

/// The entity a source file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    State,
    Color,
    Team,
    Player,
}

impl Entity {
    /// Conventional file name inside a data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Entity::State => STATE_FILE,
            Entity::Color => COLOR_FILE,
            Entity::Team => TEAM_FILE,
            Entity::Player => PLAYER_FILE,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Entity::State => "state",
            Entity::Color => "color",
            Entity::Team => "team",
            Entity::Player => "player",
        };
        write!(f, "{}", s)
    }
}

/// Why a file's load was rolled back.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid {field} '{value}'")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: store rejected row: {message}")]
    Rejected { line: usize, message: String },

    #[error("store error: {message}")]
    Store { message: String },
}

impl LoadError {
    fn store(err: anyhow::Error) -> Self {
        LoadError::Store {
            message: format!("{:#}", err),
        }
    }
}

/// Result of loading one file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// All parsed rows committed. `skipped` counts non-blank lines that had
    /// too few fields.
    Loaded { inserted: usize, skipped: usize },
    /// Nothing from the file was committed.
    Failed { reason: LoadError },
}

#[derive(Debug)]
pub struct LoadReport {
    pub entity: Entity,
    pub path: PathBuf,
    pub outcome: LoadOutcome,
}

impl LoadReport {
    pub fn is_loaded(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Loaded { .. })
    }

    /// Rows committed, zero for a failed load.
    pub fn inserted(&self) -> usize {
        match self.outcome {
            LoadOutcome::Loaded { inserted, .. } => inserted,
            LoadOutcome::Failed { .. } => 0,
        }
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            LoadOutcome::Loaded { inserted, skipped } => write!(
                f,
                "{}: loaded {} rows from {} ({} skipped)",
                self.entity,
                inserted,
                self.path.display(),
                skipped
            ),
            LoadOutcome::Failed { reason } => write!(
                f,
                "{}: failed to load {}: {}",
                self.entity,
                self.path.display(),
                reason
            ),
        }
    }
}

/// Reports for a full reload, in load order.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub reports: Vec<LoadReport>,
}

impl LoadSummary {
    pub fn all_loaded(&self) -> bool {
        self.reports.iter().all(LoadReport::is_loaded)
    }

    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_loaded()).count()
    }

    pub fn report(&self, entity: Entity) -> Option<&LoadReport> {
        self.reports.iter().find(|r| r.entity == entity)
    }
}

#[derive(Debug, Default)]
struct LoadCounts {
    inserted: usize,
    skipped: usize,
}

pub fn load_state_data<P: AsRef<Path>>(store: &Store, path: P) -> LoadReport {
    load_file::<State>(store, path.as_ref())
}

pub fn load_color_data<P: AsRef<Path>>(store: &Store, path: P) -> LoadReport {
    load_file::<Color>(store, path.as_ref())
}

pub fn load_team_data<P: AsRef<Path>>(store: &Store, path: P) -> LoadReport {
    load_file::<Team>(store, path.as_ref())
}

/// Load players. Store ids are assigned on insert, so loading the same file
/// twice without [`Store::initialize`] duplicates every player.
pub fn load_player_data<P: AsRef<Path>>(store: &Store, path: P) -> LoadReport {
    load_file::<SourcePlayer>(store, path.as_ref())
}

/// Full reload: recreate the schema, then load state, color, team and player
/// files from `data_dir` in that order.
///
/// Only a failure to initialize the store is returned as an error. Per-file
/// failures are in the summary.
pub fn load_all_data<P: AsRef<Path>>(store: &Store, data_dir: P) -> Result<LoadSummary> {
    let data_dir = data_dir.as_ref();

    tracing::info!(data_dir = %data_dir.display(), "Initializing database");
    store.initialize()?;

    let reports = vec![
        load_state_data(store, data_dir.join(STATE_FILE)),
        load_color_data(store, data_dir.join(COLOR_FILE)),
        load_team_data(store, data_dir.join(TEAM_FILE)),
        load_player_data(store, data_dir.join(PLAYER_FILE)),
    ];

    let summary = LoadSummary { reports };
    tracing::info!(
        failed = summary.failed_count(),
        "Data loading complete"
    );
    Ok(summary)
}

fn load_file<R: SourceRecord>(store: &Store, path: &Path) -> LoadReport {
    let entity = R::ENTITY;
    tracing::info!(%entity, path = %path.display(), "Loading data");

    let outcome = match stage_file::<R>(store, path) {
        Ok(counts) => {
            tracing::info!(
                %entity,
                inserted = counts.inserted,
                skipped = counts.skipped,
                "Committed"
            );
            LoadOutcome::Loaded {
                inserted: counts.inserted,
                skipped: counts.skipped,
            }
        }
        Err(reason) => {
            tracing::error!(
                %entity,
                path = %path.display(),
                error = %reason,
                "Load rolled back"
            );
            LoadOutcome::Failed { reason }
        }
    };

    LoadReport {
        entity,
        path: path.to_path_buf(),
        outcome,
    }
}

/// Parse and stage every line of `path` in one transaction.
///
/// Returning early drops the transaction uncommitted, which rolls it back.
fn stage_file<R: SourceRecord>(
    store: &Store,
    path: &Path,
) -> std::result::Result<LoadCounts, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut uow = store.open_unit_of_work().map_err(LoadError::store)?;
    let tx = uow.transaction().map_err(LoadError::store)?;
    let mut counts = LoadCounts::default();

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match R::parse(line, line_no)? {
            Some(record) => {
                record
                    .correct()
                    .stage(&tx)
                    .map_err(|err| LoadError::Rejected {
                        line: line_no,
                        message: format!("{:#}", err),
                    })?;
                counts.inserted += 1;
            }
            None => {
                tracing::debug!(entity = %R::ENTITY, line = line_no, "Skipping short line");
                counts.skipped += 1;
            }
        }
    }

    tx.commit()
        .map_err(|err| LoadError::store(anyhow::Error::from(err)))?;
    Ok(counts)
}
