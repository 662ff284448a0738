//! ACC Basketball Loader Library
//!
//! Loads a small basketball statistics dataset (states, uniform colors,
//! teams and players) from whitespace-delimited text files into SQLite, and
//! answers five canned queries over it.
//!
//! ## Features
//!
//! - **Full Reload**: Drop and recreate the schema, then load all four files in dependency order
//! - **All-or-nothing Files**: Each file commits in one transaction or not at all
//! - **Load Reports**: Per-file inserted/skipped counts or the reason the file was rolled back
//! - **Canned Queries**: Statistic ranges, team color, team roster, state + color, win threshold
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use acc_bball::{loader::load_all_data, query::query5, Store, StoreConfig};
//!
//! # fn example() -> acc_bball::Result<()> {
//! let store = Store::open(&StoreConfig::new("bball.db"))?;
//! let summary = load_all_data(&store, "data")?;
//! for report in &summary.reports {
//!     println!("{}", report);
//! }
//!
//! // Players on teams with more than 10 wins
//! query5(&store, 10)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database location to avoid passing `--db` to every command:
//! ```bash
//! export ACC_BBALL_DB=/path/to/bball.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod loader;
pub mod logging;
pub mod query;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ColorId, PlayerId, StateId, TeamId};
pub use error::{BballError, Result};
pub use storage::{Store, StoreConfig};

pub const DB_ENV_VAR: &str = "ACC_BBALL_DB";
