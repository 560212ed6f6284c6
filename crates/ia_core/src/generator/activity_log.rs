//! Activity log expansion.
//!
//! Expands each injury event into the sequence of missed games and
//! missed practices it implies. Pure and deterministic given its input
//! events: all randomness is already baked into the event fields, the
//! expansion performs no additional sampling.

use chrono::{Datelike, Duration, Weekday};
use tracing::debug;

use crate::models::{ActivityKind, ActivityLogEntry, InjuryEvent};

/// Cap on missed games per event (one full season).
const MAX_MISSED_GAMES: u32 = 17;
/// Cap on estimated missed practices per event.
const MAX_MISSED_PRACTICES: u32 = 50;
/// Simulated practice days per week (Mon-Fri).
const PRACTICES_PER_WEEK: u32 = 5;

/// Expand the corpus into missed-game and missed-practice entries.
///
/// Events with `days_out <= 0` contribute nothing. Games fall at 7-day
/// intervals from the injury date; practices walk forward from the day
/// after the injury, skipping weekends, until either the practice
/// quota or the days-out horizon is exhausted.
pub fn expand(events: &[InjuryEvent]) -> Vec<ActivityLogEntry> {
    let mut log = Vec::new();
    let mut entry_id: u32 = 1;

    for event in events {
        if event.days_out == 0 {
            continue;
        }

        let reason = format!("{} - {}", event.injury_category.name(), event.body_part);

        let missed_games = event.missed_games.min(MAX_MISSED_GAMES);
        for i in 0..missed_games {
            let game_date = event.injury_date + Duration::days((i * 7) as i64);
            log.push(entry_from(event, &reason, &mut entry_id, game_date, ActivityKind::Game));
        }

        let weeks_out = event.days_out as f64 / 7.0;
        let practice_quota =
            ((weeks_out * PRACTICES_PER_WEEK as f64).floor() as u32).min(MAX_MISSED_PRACTICES);

        let mut practice_count = 0;
        let mut day_offset: u32 = 1;
        while practice_count < practice_quota && day_offset <= event.days_out {
            let practice_date = event.injury_date + Duration::days(day_offset as i64);
            let weekday = practice_date.weekday();
            if weekday != Weekday::Sat && weekday != Weekday::Sun {
                log.push(entry_from(
                    event,
                    &reason,
                    &mut entry_id,
                    practice_date,
                    ActivityKind::Practice,
                ));
                practice_count += 1;
            }
            day_offset += 1;
        }
    }

    debug!(entries = log.len(), events = events.len(), "activity log expanded");
    log
}

fn entry_from(
    event: &InjuryEvent,
    reason: &str,
    entry_id: &mut u32,
    activity_date: chrono::NaiveDate,
    kind: ActivityKind,
) -> ActivityLogEntry {
    let entry = ActivityLogEntry {
        id: format!("AL-{entry_id}"),
        player_id: event.player_id.clone(),
        player_name: event.player_name.clone(),
        position: event.position.clone(),
        reason: reason.to_string(),
        body_part: event.body_part.clone(),
        injury_category: event.injury_category,
        clinical_impression: event.clinical_impression.clone(),
        activity_date,
        kind,
        season: event.season,
        team_id: event.team_id,
        team_name: event.team_name.clone(),
        team_abbr: event.team_abbr.clone(),
        game: event.game.clone(),
        mechanism: event.mechanism.clone(),
        contact_type: event.contact_type.clone(),
        season_type: event.season_type.clone(),
        week: event.week,
        team_activity: event.team_activity.clone(),
        missed_time_injury: event.missed_time_injury,
        missed_game_injury: event.missed_game_injury,
        missed_practice_injury: event.missed_practice_injury,
    };
    *entry_id += 1;
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{EventGenerator, GeneratorConfig};
    use chrono::NaiveDate;

    fn sample_event(days_out: u32) -> InjuryEvent {
        // One concrete event is enough; derived fields are set by hand
        // so the expansion math is exercised in isolation.
        let config = GeneratorConfig {
            seed: 5,
            seasons: vec![2024],
            players_per_team_per_season: 1,
            injury_rate: 1.0,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let mut event = EventGenerator::new(config).generate().remove(0);
        event.days_out = days_out;
        event.missed_games = days_out / 7;
        event.injury_date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(); // a Wednesday
        event
    }

    #[test]
    fn zero_days_out_contributes_nothing() {
        let event = sample_event(0);
        assert!(expand(&[event]).is_empty());
    }

    #[test]
    fn three_week_injury_produces_three_weekly_games() {
        let event = sample_event(21);
        let log = expand(&[event.clone()]);

        let games: Vec<_> = log.iter().filter(|e| e.kind == ActivityKind::Game).collect();
        assert_eq!(games.len(), 3);
        for (i, game) in games.iter().enumerate() {
            let expected = event.injury_date + Duration::days((i * 7) as i64);
            assert_eq!(game.activity_date, expected, "games are 7 days apart");
        }
    }

    #[test]
    fn practices_capped_by_quota_and_skip_weekends() {
        let event = sample_event(21);
        let log = expand(&[event]);

        let practices: Vec<_> = log.iter().filter(|e| e.kind == ActivityKind::Practice).collect();
        // Quota: min(floor(21/7 * 5), 50) = 15.
        assert!(practices.len() <= 15);
        assert!(!practices.is_empty());
        for practice in &practices {
            let weekday = practice.activity_date.weekday();
            assert!(
                weekday != Weekday::Sat && weekday != Weekday::Sun,
                "practice on {weekday:?}"
            );
        }
    }

    #[test]
    fn practices_never_exceed_days_out_horizon() {
        let event = sample_event(10);
        let log = expand(&[event.clone()]);
        for entry in log.iter().filter(|e| e.kind == ActivityKind::Practice) {
            let offset = (entry.activity_date - event.injury_date).num_days();
            assert!(offset >= 1 && offset <= event.days_out as i64);
        }
    }

    #[test]
    fn long_injuries_cap_games_at_one_season() {
        let event = sample_event(365);
        let log = expand(&[event]);
        let games = log.iter().filter(|e| e.kind == ActivityKind::Game).count();
        assert_eq!(games as u32, MAX_MISSED_GAMES);
        let practices = log.iter().filter(|e| e.kind == ActivityKind::Practice).count();
        assert_eq!(practices as u32, MAX_MISSED_PRACTICES);
    }

    #[test]
    fn entries_copy_parent_filter_fields() {
        let event = sample_event(14);
        let log = expand(&[event.clone()]);
        for entry in &log {
            assert_eq!(entry.player_name, event.player_name);
            assert_eq!(entry.team_id, event.team_id);
            assert_eq!(entry.season, event.season);
            assert_eq!(entry.week, event.week);
            assert_eq!(entry.reason, format!("{} - {}", event.injury_category.name(), event.body_part));
        }
    }

    #[test]
    fn expansion_is_deterministic() {
        let config = GeneratorConfig {
            seed: 77,
            seasons: vec![2023, 2024],
            players_per_team_per_season: 28,
            injury_rate: 0.35,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let events = EventGenerator::new(config).generate();
        assert_eq!(expand(&events), expand(&events));
    }
}
