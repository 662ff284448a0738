//! Command implementations for the ACC basketball CLI

pub mod exercise;
pub mod load_data;
pub mod run_query;


use crate::{
    error::BballError,
    storage::{Store, StoreConfig},
    Result, DB_ENV_VAR,
};
use std::path::PathBuf;

/// Resolve the store location from the CLI option, then the `ACC_BBALL_DB`
/// environment variable, then the platform data directory.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }

    match std::env::var(DB_ENV_VAR) {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => dirs::data_dir()
            .map(|dir| dir.join("acc-bball").join("bball.db"))
            .ok_or_else(|| BballError::MissingStoreLocation {
                env_var: DB_ENV_VAR.to_string(),
            }),
    }
}

/// Open the store at the resolved location.
pub fn open_store(db: Option<PathBuf>) -> Result<Store> {
    let path = resolve_db_path(db)?;
    Ok(Store::open(&StoreConfig::new(path))?)
}
