//! Statistic range arguments for the player statistics query.

use crate::error::{BballError, Result};
use std::fmt;
use std::str::FromStr;

/// Inclusive `[min, max]` bound on a single per-game statistic.
///
/// Parsed from `MIN:MAX` on the command line, e.g. `--mpg 35:40` or
/// `--spg 0.5:1.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> StatRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range, both bounds included.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl<T: fmt::Display> fmt::Display for StatRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.min, self.max)
    }
}

impl<T> FromStr for StatRange<T>
where
    T: FromStr + PartialOrd,
    T::Err: fmt::Display,
{
    type Err = BballError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| BballError::InvalidRange {
            input: s.to_string(),
            reason,
        };

        let (min, max) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected MIN:MAX".to_string()))?;
        let min: T = min.trim().parse().map_err(|e: T::Err| invalid(e.to_string()))?;
        let max: T = max.trim().parse().map_err(|e: T::Err| invalid(e.to_string()))?;

        if min > max {
            return Err(invalid("min exceeds max".to_string()));
        }
        Ok(Self { min, max })
    }
}
