//! Entry point: parse CLI and dispatch to command handlers.

use acc_bball::{
    cli::{BballCli, Commands},
    commands::{
        exercise::handle_exercise,
        load_data::handle_load,
        open_store,
        run_query::{handle_query1, handle_query2, handle_query3, handle_query4, handle_query5},
    },
    logging::init_tracing,
    Result,
};
use clap::Parser;

/// Run the CLI.
fn main() -> Result<()> {
    let app = BballCli::parse();
    init_tracing(app.verbose);

    let store = open_store(app.db)?;

    match app.command {
        Commands::Load { data_dir } => handle_load(&store, &data_dir)?,
        Commands::Query1 { stats } => handle_query1(&store, stats)?,
        Commands::Query2 { team_color } => handle_query2(&store, &team_color)?,
        Commands::Query3 { team_name } => handle_query3(&store, &team_name)?,
        Commands::Query4 {
            team_state,
            team_color,
        } => handle_query4(&store, &team_state, &team_color)?,
        Commands::Query5 { num_wins } => handle_query5(&store, num_wins)?,
        Commands::Exercise {
            data_dir,
            skip_load,
        } => {
            handle_exercise(&store, &data_dir, skip_load)?;
        }
    }

    Ok(())
}
