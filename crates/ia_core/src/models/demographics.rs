//! Player demographics model: one biographical profile per unique
//! synthesized player name, independent of season.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Biographical profile of one synthesized player.
///
/// Keyed by player name in the demographics map. Duplicate names across
/// teams/seasons collapse into one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDemographics {
    pub player_name: String,
    pub date_of_birth: NaiveDate,
    /// Age in years at the dataset's reference date.
    pub age: u32,
    /// Height formatted feet-inches, e.g. "6-2".
    pub height: String,
    /// Weight in pounds, drawn from a position-weighted range.
    pub weight: u32,
    pub college: String,
    pub years_in_league: u32,
    /// Team of the player's first corpus appearance.
    pub team_abbr: String,
    /// Position of the player's first corpus appearance.
    pub position: String,
}
