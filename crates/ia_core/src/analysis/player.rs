//! Player-level rollups: season counts, missed-time series, career
//! stat lines and record retrieval.
//!
//! Player names are matched exactly. Time series sort ascending by
//! date; record listings sort most-recent-first.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityKind, ActivityLogEntry, InjuryCategory, InjuryEvent};

/// Injury count for one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonCount {
    pub season: i32,
    pub count: u32,
}

/// One point of a per-injury time series, dated at the injury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: chrono::NaiveDate,
    pub season: i32,
    pub value: u32,
}

/// Fixed career stat line for one player. Category fields are zero
/// when the player has no injuries of that kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMajorStats {
    pub total_injuries: u32,
    pub missed_games: u32,
    pub missed_practices: u32,
    pub lex_strains: u32,
    pub acl: u32,
    pub concussions: u32,
    pub lateral_ankle_sprains: u32,
    pub high_ankle_sprains: u32,
    pub shoulder_and_clavicle: u32,
}

/// Injury count per category across a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub injury_category: String,
    pub count: u32,
}

fn player_events<'a>(player_name: &str, events: &'a [InjuryEvent]) -> Vec<&'a InjuryEvent> {
    events.iter().filter(|e| e.player_name == player_name).collect()
}

/// Injury counts per season for one player, ascending by season.
pub fn injuries_by_player_by_season(player_name: &str, events: &[InjuryEvent]) -> Vec<SeasonCount> {
    let mut counts: Vec<SeasonCount> = Vec::new();
    for event in player_events(player_name, events) {
        match counts.iter_mut().find(|c| c.season == event.season) {
            Some(entry) => entry.count += 1,
            None => counts.push(SeasonCount { season: event.season, count: 1 }),
        }
    }
    counts.sort_by_key(|c| c.season);
    counts
}

/// Days missed per injury over time, chronological.
pub fn missed_days_over_time(player_name: &str, events: &[InjuryEvent]) -> Vec<TimeSeriesPoint> {
    series(player_name, events, |e| e.days_out)
}

/// Games missed per injury over time, chronological.
pub fn missed_games_over_time(player_name: &str, events: &[InjuryEvent]) -> Vec<TimeSeriesPoint> {
    series(player_name, events, |e| e.missed_games)
}

/// Estimated practices missed per injury over time, chronological.
/// Uses the same five-practices-per-week estimate as the activity log.
pub fn missed_practices_over_time(
    player_name: &str,
    events: &[InjuryEvent],
) -> Vec<TimeSeriesPoint> {
    series(player_name, events, estimated_practices)
}

fn estimated_practices(event: &InjuryEvent) -> u32 {
    (event.days_out as f64 / 7.0 * 5.0).floor() as u32
}

fn series(
    player_name: &str,
    events: &[InjuryEvent],
    value: impl Fn(&InjuryEvent) -> u32,
) -> Vec<TimeSeriesPoint> {
    let mut points: Vec<TimeSeriesPoint> = player_events(player_name, events)
        .into_iter()
        .map(|e| TimeSeriesPoint { date: e.injury_date, season: e.season, value: value(e) })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Career stat line for one player. An unknown name yields all zeros.
pub fn player_major_stats(player_name: &str, events: &[InjuryEvent]) -> PlayerMajorStats {
    let mut stats = PlayerMajorStats::default();
    for event in player_events(player_name, events) {
        stats.total_injuries += 1;
        stats.missed_games += event.missed_games;
        stats.missed_practices += estimated_practices(event);
        match event.injury_category {
            InjuryCategory::LexStrain => stats.lex_strains += 1,
            InjuryCategory::Acl => stats.acl += 1,
            InjuryCategory::Concussion => stats.concussions += 1,
            InjuryCategory::LateralAnkleSprain => stats.lateral_ankle_sprains += 1,
            InjuryCategory::HighAnkleSprain => stats.high_ankle_sprains += 1,
            InjuryCategory::Shoulder => stats.shoulder_and_clavicle += 1,
            _ => {}
        }
    }
    stats
}

/// A player's injury records, most recent first.
pub fn player_injury_records(player_name: &str, events: &[InjuryEvent]) -> Vec<InjuryEvent> {
    let mut records: Vec<InjuryEvent> =
        player_events(player_name, events).into_iter().cloned().collect();
    records.sort_by(|a, b| b.injury_date.cmp(&a.injury_date));
    records
}

/// A player's activity log entries, most recent first.
pub fn player_activity_log(
    player_name: &str,
    entries: &[ActivityLogEntry],
) -> Vec<ActivityLogEntry> {
    let mut log: Vec<ActivityLogEntry> =
        entries.iter().filter(|e| e.player_name == player_name).cloned().collect();
    log.sort_by(|a, b| b.activity_date.cmp(&a.activity_date));
    log
}

/// Injury counts per category across a slice, descending by count with
/// alphabetical tiebreak.
pub fn injury_counts_by_category(events: &[InjuryEvent]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for event in events {
        let name = event.injury_category.name();
        match counts.iter_mut().find(|c| c.injury_category == name) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount { injury_category: name.to_string(), count: 1 }),
        }
    }
    counts.sort_by(|a, b| {
        b.count.cmp(&a.count).then_with(|| a.injury_category.cmp(&b.injury_category))
    });
    counts
}
