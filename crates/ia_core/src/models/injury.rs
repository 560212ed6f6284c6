//! Injury event model.
//!
//! `InjuryEvent` is the central entity of the corpus: one row per
//! injury occurrence, carrying its organization context, classification
//! and temporal fields. Events are created once by the generator and
//! never mutated afterward; everything else in the crate is a derived
//! view over `&[InjuryEvent]`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days-out threshold above which an injury counts as "missed time".
/// The comparison is strict: exactly 3 days out does NOT qualify.
pub const MISSED_TIME_THRESHOLD_DAYS: u32 = 3;

/// Closed enumeration of injury categories.
///
/// Each category carries a fixed sampling weight (the vector sums to 1
/// across all variants) and a recovery profile bounding sampled
/// recovery durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryCategory {
    Concussion,
    Shoulder,
    #[serde(rename = "LEX Sprain")]
    LexSprain,
    #[serde(rename = "LEX Strain")]
    LexStrain,
    #[serde(rename = "ACL")]
    Acl,
    Hamstring,
    Ankle,
    #[serde(rename = "High Ankle Sprain")]
    HighAnkleSprain,
    #[serde(rename = "Lateral Ankle Sprain")]
    LateralAnkleSprain,
    Knee,
    Back,
    Foot,
    Hand,
    Quad,
    Hip,
    Groin,
}

impl InjuryCategory {
    /// All categories, in sampling-weight order.
    pub fn all() -> &'static [InjuryCategory] {
        use InjuryCategory::*;
        &[
            Concussion,
            Shoulder,
            LexSprain,
            LexStrain,
            Acl,
            Hamstring,
            Ankle,
            HighAnkleSprain,
            LateralAnkleSprain,
            Knee,
            Back,
            Foot,
            Hand,
            Quad,
            Hip,
            Groin,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        use InjuryCategory::*;
        match self {
            Concussion => "Concussion",
            Shoulder => "Shoulder",
            LexSprain => "LEX Sprain",
            LexStrain => "LEX Strain",
            Acl => "ACL",
            Hamstring => "Hamstring",
            Ankle => "Ankle",
            HighAnkleSprain => "High Ankle Sprain",
            LateralAnkleSprain => "Lateral Ankle Sprain",
            Knee => "Knee",
            Back => "Back",
            Foot => "Foot",
            Hand => "Hand",
            Quad => "Quad",
            Hip => "Hip",
            Groin => "Groin",
        }
    }

    /// Sampling weight. The vector over `all()` sums to 1.0.
    pub fn weight(&self) -> f64 {
        use InjuryCategory::*;
        match self {
            Concussion => 0.15,
            Shoulder => 0.12,
            LexSprain => 0.08,
            LexStrain => 0.08,
            Acl => 0.05,
            Hamstring => 0.15,
            Ankle => 0.06,
            HighAnkleSprain => 0.03,
            LateralAnkleSprain => 0.03,
            Knee => 0.08,
            Back => 0.06,
            Foot => 0.04,
            Hand => 0.03,
            Quad => 0.02,
            Hip => 0.01,
            Groin => 0.01,
        }
    }

    /// Recovery profile bounding sampled recovery durations.
    pub fn recovery_profile(&self) -> RecoveryProfile {
        use InjuryCategory::*;
        match self {
            Concussion => RecoveryProfile::new(7, 28, [7, 14, 21]),
            Shoulder => RecoveryProfile::new(14, 180, [21, 60, 150]),
            LexSprain => RecoveryProfile::new(7, 42, [10, 21, 35]),
            LexStrain => RecoveryProfile::new(10, 56, [14, 28, 45]),
            Acl => RecoveryProfile::new(180, 365, [200, 270, 330]),
            Hamstring => RecoveryProfile::new(14, 90, [21, 42, 70]),
            Ankle => RecoveryProfile::new(7, 60, [14, 28, 50]),
            HighAnkleSprain => RecoveryProfile::new(21, 84, [28, 42, 70]),
            LateralAnkleSprain => RecoveryProfile::new(7, 42, [14, 21, 35]),
            Knee => RecoveryProfile::new(14, 120, [21, 45, 90]),
            Back => RecoveryProfile::new(7, 90, [14, 35, 70]),
            Foot => RecoveryProfile::new(14, 90, [21, 42, 75]),
            Hand => RecoveryProfile::new(7, 42, [10, 21, 35]),
            Quad => RecoveryProfile::new(14, 60, [21, 35, 50]),
            Hip => RecoveryProfile::new(21, 120, [30, 60, 100]),
            Groin => RecoveryProfile::new(14, 60, [21, 35, 50]),
        }
    }
}

/// Per-category recovery bounds and per-severity baseline day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryProfile {
    pub min_days: u32,
    pub max_days: u32,
    /// Baseline days out, indexed Minor/Moderate/Severe.
    baselines: [u32; 3],
}

impl RecoveryProfile {
    const fn new(min_days: u32, max_days: u32, baselines: [u32; 3]) -> Self {
        Self { min_days, max_days, baselines }
    }

    /// Baseline recovery days for a severity tier, before jitter.
    pub fn baseline(&self, severity: Severity) -> u32 {
        self.baselines[severity as usize]
    }

    /// Clamp a jittered day count into this profile's bounds.
    pub fn clamp_days(&self, days: i64) -> u32 {
        days.clamp(self.min_days as i64, self.max_days as i64) as u32
    }
}

/// Severity tier of an injury event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    Minor = 0,
    Moderate = 1,
    Severe = 2,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[Severity::Minor, Severity::Moderate, Severity::Severe]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    /// Sampling weight (Minor 50%, Moderate 35%, Severe 15%).
    pub fn weight(&self) -> f64 {
        match self {
            Severity::Minor => 0.50,
            Severity::Moderate => 0.35,
            Severity::Severe => 0.15,
        }
    }
}

/// Current recovery status. A strict function of the expected return
/// date, the reference date, and the on-time-return trial; never
/// independently chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryStatus {
    Out,
    Limited,
    Recovered,
}

impl InjuryStatus {
    pub fn name(&self) -> &'static str {
        match self {
            InjuryStatus::Out => "Out",
            InjuryStatus::Limited => "Limited",
            InjuryStatus::Recovered => "Recovered",
        }
    }
}

/// Session the player was in when the injury occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Games,
    Practice,
    Conditioning,
    Recovery,
    #[serde(rename = "Strength Training")]
    StrengthTraining,
    #[serde(rename = "Film Study")]
    FilmStudy,
}

impl SessionType {
    /// All session types, in sampling-weight order.
    pub fn all() -> &'static [SessionType] {
        use SessionType::*;
        &[Games, Practice, Conditioning, Recovery, StrengthTraining, FilmStudy]
    }

    pub fn name(&self) -> &'static str {
        use SessionType::*;
        match self {
            Games => "Games",
            Practice => "Practice",
            Conditioning => "Conditioning",
            Recovery => "Recovery",
            StrengthTraining => "Strength Training",
            FilmStudy => "Film Study",
        }
    }

    /// Sampling weight (most injuries happen in games and practice).
    pub fn weight(&self) -> f64 {
        use SessionType::*;
        match self {
            Games => 0.45,
            Practice => 0.35,
            Conditioning => 0.10,
            Recovery => 0.03,
            StrengthTraining => 0.05,
            FilmStudy => 0.02,
        }
    }

    /// Team-activity token derived from the session type.
    pub fn activity_label(&self) -> &'static str {
        use SessionType::*;
        match self {
            Games => "Game",
            Practice => "Practice",
            Conditioning => "Conditioning",
            Recovery | StrengthTraining | FilmStudy => "Training",
        }
    }
}

/// Roster status at observation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterStatus {
    Active,
    #[serde(rename = "Injured Reserve")]
    InjuredReserve,
    #[serde(rename = "Practice Squad")]
    PracticeSquad,
    #[serde(rename = "Physically Unable to Perform")]
    PhysicallyUnableToPerform,
    #[serde(rename = "Non-Football Injury")]
    NonFootballInjury,
    Released,
}

/// Body side of the injury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Midline,
    Head,
}

impl Side {
    pub fn all() -> &'static [Side] {
        &[Side::Left, Side::Right, Side::Midline, Side::Head]
    }
}

/// One synthesized injury occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryEvent {
    // Identity
    pub id: String,
    pub player_id: String,
    pub player_name: String,

    // Organization context
    pub team_id: u32,
    pub team_name: String,
    pub team_abbr: String,

    // Classification
    pub position: String,
    pub position_group: String,
    pub position_at_injury: String,
    pub injury_category: InjuryCategory,
    pub body_part: String,
    pub mechanism: String,
    pub contact_type: String,
    pub severity: Severity,
    pub side: Side,
    pub clinical_impression: String,

    // Temporal context
    pub season: i32,
    pub week: u32,
    pub gameweek: String,
    pub week_type_name: String,
    pub game: String,
    pub season_type: String,
    pub team_activity: String,
    pub session_type: SessionType,
    pub injury_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,

    // Outcome
    pub days_out: u32,
    pub status: InjuryStatus,
    pub missed_games: u32,
    pub missed_time_injury: bool,
    pub missed_game_injury: bool,
    pub missed_practice_injury: bool,

    // Flags
    pub is_recurring: bool,
    pub is_past_player: bool,
    pub roster_status: RosterStatus,
    pub participation_reason: String,
    pub description: String,
}

impl InjuryEvent {
    /// Whether this event crosses the missed-time threshold (strict).
    pub fn is_missed_time(&self) -> bool {
        self.days_out > MISSED_TIME_THRESHOLD_DAYS
    }
}
