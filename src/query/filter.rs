//! Player statistic filter for the range query.

use crate::cli::types::StatRange;
use rusqlite::types::Value;

/// Optional inclusive range per statistic. Enabled ranges are ANDed; a
/// filter with nothing enabled matches every player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStatFilter {
    pub mpg: Option<StatRange<i64>>,
    pub ppg: Option<StatRange<i64>>,
    pub rpg: Option<StatRange<i64>>,
    pub apg: Option<StatRange<i64>>,
    pub spg: Option<StatRange<f64>>,
    pub bpg: Option<StatRange<f64>>,
}

impl PlayerStatFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mpg(mut self, min: i64, max: i64) -> Self {
        self.mpg = Some(StatRange::new(min, max));
        self
    }

    pub fn ppg(mut self, min: i64, max: i64) -> Self {
        self.ppg = Some(StatRange::new(min, max));
        self
    }

    pub fn rpg(mut self, min: i64, max: i64) -> Self {
        self.rpg = Some(StatRange::new(min, max));
        self
    }

    pub fn apg(mut self, min: i64, max: i64) -> Self {
        self.apg = Some(StatRange::new(min, max));
        self
    }

    pub fn spg(mut self, min: f64, max: f64) -> Self {
        self.spg = Some(StatRange::new(min, max));
        self
    }

    pub fn bpg(mut self, min: f64, max: f64) -> Self {
        self.bpg = Some(StatRange::new(min, max));
        self
    }

    /// Build the `WHERE` clause and its bound parameters.
    ///
    /// Column names come from a fixed list, never from input.
    pub(crate) fn where_clause(&self) -> (String, Vec<Value>) {
        let mut clause = String::from("WHERE 1=1");
        let mut params = Vec::new();

        let int_ranges = [
            ("mpg", &self.mpg),
            ("ppg", &self.ppg),
            ("rpg", &self.rpg),
            ("apg", &self.apg),
        ];
        for (column, range) in int_ranges {
            if let Some(range) = range {
                clause.push_str(&format!(" AND {} BETWEEN ? AND ?", column));
                params.push(Value::Integer(range.min));
                params.push(Value::Integer(range.max));
            }
        }

        let real_ranges = [("spg", &self.spg), ("bpg", &self.bpg)];
        for (column, range) in real_ranges {
            if let Some(range) = range {
                clause.push_str(&format!(" AND {} BETWEEN ? AND ?", column));
                params.push(Value::Real(range.min));
                params.push(Value::Real(range.max));
            }
        }

        (clause, params)
    }
}
