//! Demo command: full reload, then one call to each canned query.

use crate::{
    loader::load_all_data,
    query::{query1, query2, query3, query4, query5, PlayerStatFilter},
    storage::Store,
    Result,
};
use std::path::Path;

/// Row counts from one pass over the demo queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExerciseCounts {
    pub query1: usize,
    pub query2: usize,
    pub query3: usize,
    pub query4: usize,
    pub query5: usize,
}

/// Reload from `data_dir` (unless `skip_load`), then run the demo queries.
///
/// Files that fail to load are reported and the queries still run against
/// whatever was committed.
pub fn handle_exercise(store: &Store, data_dir: &Path, skip_load: bool) -> Result<ExerciseCounts> {
    if !skip_load {
        let summary = load_all_data(store, data_dir)?;
        for report in summary.reports.iter().filter(|r| !r.is_loaded()) {
            println!("⚠ {}", report);
        }
        println!("\nDatabase loaded. Running queries...");
    }

    run_demo_queries(store)
}

/// One call to each query with the stock demo arguments.
pub fn run_demo_queries(store: &Store) -> Result<ExerciseCounts> {
    println!("\n=== Query 1: Players with MPG between 35 and 40 ===");
    let q1 = query1(store, &PlayerStatFilter::new().mpg(35, 40))?;

    println!("\n=== Query 2: Teams with DarkBlue color ===");
    let q2 = query2(store, "DarkBlue")?;

    println!("\n=== Query 3: Players on Duke ordered by PPG ===");
    let q3 = query3(store, "Duke")?;

    println!("\n=== Query 4: Players in NC with DarkBlue uniform ===");
    let q4 = query4(store, "NC", "DarkBlue")?;

    println!("\n=== Query 5: Players on teams with more than 10 wins ===");
    let q5 = query5(store, 10)?;

    Ok(ExerciseCounts {
        query1: q1.len(),
        query2: q2.len(),
        query3: q3.len(),
        query4: q4.len(),
        query5: q5.len(),
    })
}
