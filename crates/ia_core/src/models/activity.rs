//! Activity log model: one missed game or missed practice derived from
//! exactly one parent injury event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::injury::InjuryCategory;

/// Discriminator for an activity log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Game,
    Practice,
}

impl ActivityKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActivityKind::Game => "Game",
            ActivityKind::Practice => "Practice",
        }
    }
}

/// One missed game or missed practice.
///
/// Carries a copy of the parent event's filterable attributes so the
/// log can be filtered without joining back to the corpus. Created once
/// during derivation, immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,
    pub player_id: String,
    pub player_name: String,
    pub position: String,
    /// Display reason, "{category} - {body part}".
    pub reason: String,
    pub body_part: String,
    pub injury_category: InjuryCategory,
    pub clinical_impression: String,
    pub activity_date: NaiveDate,
    pub kind: ActivityKind,
    pub season: i32,
    pub team_id: u32,
    pub team_name: String,
    pub team_abbr: String,

    // Filter fields copied from the parent injury event.
    pub game: String,
    pub mechanism: String,
    pub contact_type: String,
    pub season_type: String,
    pub week: u32,
    pub team_activity: String,
    pub missed_time_injury: bool,
    pub missed_game_injury: bool,
    pub missed_practice_injury: bool,
}
