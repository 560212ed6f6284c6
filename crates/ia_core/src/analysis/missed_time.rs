//! Missed-time rollups, benchmarks and league standings.
//!
//! All functions are pure and re-scan the event slice they are given;
//! callers pass a pre-filtered subset or the full corpus. Lookup
//! misses return zero-valued structs, degenerate averages return 0.

use serde::{Deserialize, Serialize};

use crate::data::{position_rank, team_by_id, TEAMS};
use crate::models::InjuryEvent;

/// Missed-time aggregate for one (organization, season) pair.
///
/// Recomputed on demand from the corpus; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedTimeStats {
    pub team_id: u32,
    pub team_name: String,
    pub team_abbr: String,
    pub season: i32,
    pub total_injuries: u32,
    /// Injuries with days-out strictly above the missed-time threshold.
    pub missed_time_injuries: u32,
    /// Days missed summed over missed-time injuries only.
    pub total_days_missed: u32,
    pub avg_days_per_injury: f64,
}

impl MissedTimeStats {
    /// Zero-valued row for lookup misses.
    fn empty(team_id: u32, season: i32) -> Self {
        let (name, abbr) = match team_by_id(team_id) {
            Some(team) => (team.name.to_string(), team.abbreviation.to_string()),
            None => (String::new(), String::new()),
        };
        Self {
            team_id,
            team_name: name,
            team_abbr: abbr,
            season,
            total_injuries: 0,
            missed_time_injuries: 0,
            total_days_missed: 0,
            avg_days_per_injury: 0.0,
        }
    }
}

/// Distinct seasons present in the slice, ascending.
fn observed_seasons(events: &[InjuryEvent]) -> Vec<i32> {
    let mut seasons: Vec<i32> = events.iter().map(|e| e.season).collect();
    seasons.sort_unstable();
    seasons.dedup();
    seasons
}

/// Missed-time stats for every catalog organization in every observed
/// season. Organizations with no events in a season still get a
/// zero-valued row so standings cover the whole league.
pub fn missed_time_stats(events: &[InjuryEvent]) -> Vec<MissedTimeStats> {
    let seasons = observed_seasons(events);
    let mut stats = Vec::with_capacity(TEAMS.len() * seasons.len());
    for team in TEAMS {
        for &season in &seasons {
            stats.push(stats_for(events, team.id, season));
        }
    }
    stats
}

/// Counts and day totals for one (organization, season) pair.
pub fn stats_for(events: &[InjuryEvent], team_id: u32, season: i32) -> MissedTimeStats {
    let mut row = MissedTimeStats::empty(team_id, season);
    let mut missed_days: u32 = 0;

    for event in events {
        if event.team_id != team_id || event.season != season {
            continue;
        }
        row.total_injuries += 1;
        if event.is_missed_time() {
            row.missed_time_injuries += 1;
            missed_days += event.days_out;
        }
    }

    row.total_days_missed = missed_days;
    if row.missed_time_injuries > 0 {
        row.avg_days_per_injury = missed_days as f64 / row.missed_time_injuries as f64;
    }
    row
}

/// Average missed-time injuries over the `n` seasons immediately
/// preceding `season`. Seasons absent from the slice are skipped;
/// returns 0 when no candidate season matches.
pub fn team_n_year_avg(events: &[InjuryEvent], team_id: u32, season: i32, n: u32) -> f64 {
    let observed = observed_seasons(events);
    let candidates: Vec<i32> = (1..=n as i32)
        .map(|back| season - back)
        .filter(|s| observed.contains(s))
        .collect();
    if candidates.is_empty() {
        return 0.0;
    }

    let total: u32 = candidates
        .iter()
        .map(|&s| stats_for(events, team_id, s).missed_time_injuries)
        .sum();
    total as f64 / candidates.len() as f64
}

/// Average missed-time injuries across all organizations for one
/// season; 0 when the season is absent from the slice.
pub fn league_avg(events: &[InjuryEvent], season: i32) -> f64 {
    if !observed_seasons(events).contains(&season) {
        return 0.0;
    }
    let total: u32 =
        TEAMS.iter().map(|team| stats_for(events, team.id, season).missed_time_injuries).sum();
    total as f64 / TEAMS.len() as f64
}

/// League standing of one organization for a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based rank, ascending by missed-time count (fewer is better).
    pub position: u32,
    /// True when at least one other organization shares the count.
    /// Tied organizations still occupy distinct sequential positions;
    /// ranks are deliberately NOT collapsed.
    pub is_tied: bool,
}

/// Rank an organization by missed-time injuries among all catalog
/// organizations for the season. Unknown organizations land at the
/// bottom of the table, untied.
pub fn standing(events: &[InjuryEvent], team_id: u32, season: i32) -> Standing {
    let mut rows: Vec<MissedTimeStats> =
        TEAMS.iter().map(|team| stats_for(events, team.id, season)).collect();
    rows.sort_by_key(|row| row.missed_time_injuries);

    let Some(index) = rows.iter().position(|row| row.team_id == team_id) else {
        return Standing { position: TEAMS.len() as u32, is_tied: false };
    };

    let count = rows[index].missed_time_injuries;
    let is_tied = rows.iter().filter(|row| row.missed_time_injuries == count).count() > 1;

    Standing { position: index as u32 + 1, is_tied }
}

/// Benchmark bundle for comparison displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    /// Previous season's missed-time count for this organization.
    pub one_year_team_avg: f64,
    /// Current-season missed-time count.
    pub current_season: u32,
    /// Average over the three preceding seasons.
    pub three_year_avg: f64,
    /// League average for the previous season.
    pub one_year_league_avg: f64,
}

/// Bundle the benchmark scalars for one (organization, season) pair.
pub fn benchmark_data(events: &[InjuryEvent], team_id: u32, season: i32) -> BenchmarkData {
    BenchmarkData {
        one_year_team_avg: team_n_year_avg(events, team_id, season, 1),
        current_season: stats_for(events, team_id, season).missed_time_injuries,
        three_year_avg: team_n_year_avg(events, team_id, season, 3),
        one_year_league_avg: league_avg(events, season - 1),
    }
}

/// Missed-time injury count for one roster position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMissedTime {
    pub position: String,
    pub missed_time_injuries: u32,
}

/// Missed-time injuries grouped by position for one (organization,
/// season) pair, ordered by the canonical position catalog. Positions
/// outside the catalog sort after it, alphabetically.
pub fn missed_time_by_position(
    events: &[InjuryEvent],
    team_id: u32,
    season: i32,
) -> Vec<PositionMissedTime> {
    let mut counts: Vec<PositionMissedTime> = Vec::new();
    for event in events {
        if event.team_id != team_id || event.season != season || !event.is_missed_time() {
            continue;
        }
        match counts.iter_mut().find(|c| c.position == event.position) {
            Some(entry) => entry.missed_time_injuries += 1,
            None => counts.push(PositionMissedTime {
                position: event.position.clone(),
                missed_time_injuries: 1,
            }),
        }
    }

    counts.sort_by(|a, b| match (position_rank(&a.position), position_rank(&b.position)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.position.cmp(&b.position),
    });
    counts
}
