//! Error types for the ACC basketball loader

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BballError>;

#[derive(Error, Debug)]
pub enum BballError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store location not provided, {env_var} not set and no data directory available")]
    MissingStoreLocation { env_var: String },

    #[error("Invalid statistic range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("{failed} of {total} data files failed to load")]
    LoadFailed { failed: usize, total: usize },
}

impl From<anyhow::Error> for BballError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<rusqlite::Error>() {
            Ok(db) => BballError::Database(db),
            Err(err) => match err.downcast::<r2d2::Error>() {
                Ok(pool) => BballError::Pool(pool),
                Err(err) => BballError::Store {
                    message: format!("{:#}", err),
                },
            },
        }
    }
}
