//! Data corrections applied to source rows before they are staged.
//!
//! Each override is a one-off fix for a known defect in the source files.
//! They are kept in one table so they can be audited, and removing an entry
//! removes the correction without touching parsing.

use crate::cli::types::TeamId;
use std::ops::RangeInclusive;

/// Reassign players from one team to another, keyed by their source-file id.
#[derive(Debug, Clone)]
pub struct PlayerTeamOverride {
    /// Player ids as they appear in the first column of the player file.
    pub source_player_ids: RangeInclusive<i64>,
    pub from_team: TeamId,
    pub to_team: TeamId,
    pub note: &'static str,
}

impl PlayerTeamOverride {
    fn applies_to(&self, source_player_id: i64, team_id: TeamId) -> bool {
        team_id == self.from_team && self.source_player_ids.contains(&source_player_id)
    }
}

pub const PLAYER_TEAM_OVERRIDES: &[PlayerTeamOverride] = &[PlayerTeamOverride {
    source_player_ids: 112..=126,
    from_team: TeamId(9),
    to_team: TeamId(12),
    note: "UNC roster listed under team 9 in the source player file",
}];

/// Team a source player row should be stored under.
///
/// Returns `team_id` unchanged unless an entry in
/// [`PLAYER_TEAM_OVERRIDES`] matches.
pub fn corrected_team(source_player_id: i64, team_id: TeamId) -> TeamId {
    corrected_team_with(PLAYER_TEAM_OVERRIDES, source_player_id, team_id)
}

pub(crate) fn corrected_team_with(
    overrides: &[PlayerTeamOverride],
    source_player_id: i64,
    team_id: TeamId,
) -> TeamId {
    match overrides
        .iter()
        .find(|o| o.applies_to(source_player_id, team_id))
    {
        Some(o) => {
            tracing::debug!(
                source_player_id,
                from = %o.from_team,
                to = %o.to_team,
                note = o.note,
                "Applied player team override"
            );
            o.to_team
        }
        None => team_id,
    }
}
