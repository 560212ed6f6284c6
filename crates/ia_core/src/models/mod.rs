//! Core data model: injury events, activity log entries and player
//! demographics.

pub mod activity;
pub mod demographics;
pub mod injury;

pub use activity::{ActivityKind, ActivityLogEntry};
pub use demographics::PlayerDemographics;
pub use injury::{
    InjuryCategory, InjuryEvent, InjuryStatus, RecoveryProfile, RosterStatus, SessionType,
    Severity, Side, MISSED_TIME_THRESHOLD_DAYS,
};
