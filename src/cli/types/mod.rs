//! Type-safe wrappers for basketball entity IDs and query arguments.

pub mod ids;
pub mod stats;

#[cfg(test)]
mod tests;

pub use ids::{ColorId, PlayerId, StateId, TeamId};
pub use stats::StatRange;
