//! Query command implementations

use crate::{
    cli::StatFilterArgs,
    query::{query1, query2, query3, query4, query5, PlayerStatFilter},
    storage::Store,
    Result,
};

impl From<StatFilterArgs> for PlayerStatFilter {
    fn from(args: StatFilterArgs) -> Self {
        PlayerStatFilter {
            mpg: args.mpg,
            ppg: args.ppg,
            rpg: args.rpg,
            apg: args.apg,
            spg: args.spg,
            bpg: args.bpg,
        }
    }
}

pub fn handle_query1(store: &Store, stats: StatFilterArgs) -> Result<()> {
    query1(store, &PlayerStatFilter::from(stats))?;
    Ok(())
}

pub fn handle_query2(store: &Store, team_color: &str) -> Result<()> {
    query2(store, team_color)?;
    Ok(())
}

pub fn handle_query3(store: &Store, team_name: &str) -> Result<()> {
    query3(store, team_name)?;
    Ok(())
}

pub fn handle_query4(store: &Store, team_state: &str, team_color: &str) -> Result<()> {
    query4(store, team_state, team_color)?;
    Ok(())
}

pub fn handle_query5(store: &Store, num_wins: i64) -> Result<()> {
    query5(store, num_wins)?;
    Ok(())
}
