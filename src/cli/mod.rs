//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::StatRange;

/// Per-statistic ranges for `query1`. Omitted statistics are not filtered.
#[derive(Debug, Args)]
pub struct StatFilterArgs {
    /// Minutes per game range, `MIN:MAX` inclusive.
    #[clap(long, value_name = "MIN:MAX")]
    pub mpg: Option<StatRange<i64>>,

    /// Points per game range, `MIN:MAX` inclusive.
    #[clap(long, value_name = "MIN:MAX")]
    pub ppg: Option<StatRange<i64>>,

    /// Rebounds per game range, `MIN:MAX` inclusive.
    #[clap(long, value_name = "MIN:MAX")]
    pub rpg: Option<StatRange<i64>>,

    /// Assists per game range, `MIN:MAX` inclusive.
    #[clap(long, value_name = "MIN:MAX")]
    pub apg: Option<StatRange<i64>>,

    /// Steals per game range, `MIN:MAX` inclusive (decimals allowed).
    #[clap(long, value_name = "MIN:MAX")]
    pub spg: Option<StatRange<f64>>,

    /// Blocks per game range, `MIN:MAX` inclusive (decimals allowed).
    #[clap(long, value_name = "MIN:MAX")]
    pub bpg: Option<StatRange<f64>>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Drop and recreate all tables, then load state, color, team and player files.
    Load {
        /// Directory holding state.txt, color.txt, team.txt and player.txt.
        #[clap(long, short, default_value = ".")]
        data_dir: PathBuf,
    },

    /// Players whose per-game statistics fall within every given range.
    Query1 {
        #[clap(flatten)]
        stats: StatFilterArgs,
    },

    /// Teams wearing the given uniform color.
    Query2 {
        /// Color name (exact, case-sensitive).
        team_color: String,
    },

    /// Players on the given team, ordered by points per game.
    Query3 {
        /// Team name (exact, case-sensitive).
        team_name: String,
    },

    /// Players on teams in the given state wearing the given color.
    Query4 {
        /// State name (exact, case-sensitive).
        team_state: String,
        /// Color name (exact, case-sensitive).
        team_color: String,
    },

    /// Players on teams with more than the given number of wins.
    Query5 {
        /// Win threshold (exclusive).
        num_wins: i64,
    },

    /// Full reload followed by the five demo queries.
    Exercise {
        /// Directory holding the four data files.
        #[clap(long, short, default_value = ".")]
        data_dir: PathBuf,

        /// Query the existing store without reloading it first.
        #[clap(long)]
        skip_load: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "acc-bball", about = "ACC basketball statistics loader and query tool")]
pub struct BballCli {
    /// SQLite database file (or set `ACC_BBALL_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log debug detail (skipped lines, applied corrections) to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
