//! ID types for the basketball entities.

use crate::error::{BballError, Result};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = BballError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.parse()?))
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

entity_id!(
    /// Type-safe wrapper for State IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acc_bball::StateId;
    ///
    /// let state_id = StateId::new(5);
    /// assert_eq!(state_id.as_i64(), 5);
    /// assert_eq!(state_id.to_string(), "5");
    /// ```
    StateId
);

entity_id!(
    /// Type-safe wrapper for uniform Color IDs
    ColorId
);

entity_id!(
    /// Type-safe wrapper for Team IDs
    TeamId
);

entity_id!(
    /// Type-safe wrapper for Player IDs (assigned by the store on insert)
    PlayerId
);
