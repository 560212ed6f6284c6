//! Injury event corpus generator.
//!
//! Produces the immutable event corpus with weighted stochastic
//! sampling and bounded-jitter recovery modeling. Every draw goes
//! through one `ChaCha8Rng` seeded from the config, so the same config
//! always yields the same corpus.

use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::data::{pools, position_group, Team, POSITIONS, TEAMS};
use crate::models::{
    InjuryCategory, InjuryEvent, InjuryStatus, RosterStatus, SessionType, Severity, Side,
    MISSED_TIME_THRESHOLD_DAYS,
};

use super::config::GeneratorConfig;
use super::sampler::{pick, WeightedTable};

/// Recovery-time jitter applied to the severity baseline, in days.
const DAYS_OUT_JITTER: i64 = 7;
/// Jitter applied to the actual return date of recovered players.
const RETURN_DATE_JITTER: i64 = 3;
/// Probability that an overdue player actually returned on time.
const ON_TIME_RETURN_PROBABILITY: f64 = 0.85;
/// Regular-season week range.
const WEEKS_PER_SEASON: u32 = 18;

/// Stateful corpus generator. Holds the seeded RNG and the shared
/// weighted tables for category, severity and session draws.
pub struct EventGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
    categories: WeightedTable<InjuryCategory>,
    severities: WeightedTable<Severity>,
    sessions: WeightedTable<SessionType>,
}

impl EventGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let categories = WeightedTable::new(
            &InjuryCategory::all().iter().map(|c| (*c, c.weight())).collect::<Vec<_>>(),
            // Fallback when rounding leaves no bucket selected.
            InjuryCategory::Ankle,
        );
        let severities = WeightedTable::new(
            &Severity::all().iter().map(|s| (*s, s.weight())).collect::<Vec<_>>(),
            Severity::Minor,
        );
        let sessions = WeightedTable::new(
            &SessionType::all().iter().map(|s| (*s, s.weight())).collect::<Vec<_>>(),
            SessionType::Practice,
        );
        Self { config, rng, categories, severities, sessions }
    }

    /// Generate the full corpus: for each (season, organization) pair,
    /// `floor(players * rate) + U(0,5)` events. Generation is total
    /// over its inputs; the caller owns the returned collection.
    pub fn generate(&mut self) -> Vec<InjuryEvent> {
        let seasons = self.config.seasons.clone();
        let base = self.config.base_events_per_team();
        let mut events = Vec::new();
        let mut record_id: u32 = 1;

        for &season in &seasons {
            for team in TEAMS {
                let count = base + self.rng.gen_range(0..5);
                debug!(season, team = team.abbreviation, count, "generating team-season events");
                for i in 0..count {
                    events.push(self.generate_event(season, team, i, record_id));
                    record_id += 1;
                }
            }
        }

        info!(events = events.len(), seasons = seasons.len(), "injury corpus generated");
        events
    }

    fn generate_event(&mut self, season: i32, team: &Team, index: u32, record_id: u32) -> InjuryEvent {
        let rng = &mut self.rng;

        let position = pick(rng, POSITIONS);
        let player_name =
            format!("{} {}", pick(rng, pools::FIRST_NAMES), pick(rng, pools::LAST_NAMES));
        let player_id = format!("{}-{}-P{}", team.abbreviation, season, index);

        let injury_category = self.categories.sample(rng);
        let severity = self.severities.sample(rng);

        let week = rng.gen_range(1..=WEEKS_PER_SEASON);
        let injury_date = random_date_in_week(rng, season, week);

        // Recovery time: severity baseline with clamped jitter. The
        // clamp keeps days-out inside the category's profile bounds.
        let profile = injury_category.recovery_profile();
        let jitter = rng.gen_range(-DAYS_OUT_JITTER..=DAYS_OUT_JITTER);
        let days_out = profile.clamp_days(profile.baseline(severity) as i64 + jitter);

        let expected_return_date = injury_date + Duration::days(days_out as i64);
        let today = self.config.reference_date;

        let (status, actual_return_date) = if expected_return_date < today {
            if rng.gen::<f64>() < ON_TIME_RETURN_PROBABILITY {
                let return_jitter = rng.gen_range(-RETURN_DATE_JITTER..=RETURN_DATE_JITTER);
                (InjuryStatus::Recovered, Some(expected_return_date + Duration::days(return_jitter)))
            } else if rng.gen::<f64>() < 0.5 {
                (InjuryStatus::Limited, None)
            } else {
                (InjuryStatus::Out, None)
            }
        } else {
            (InjuryStatus::Out, None)
        };

        let session_type = self.sessions.sample(rng);
        let mechanism = pick(rng, pools::MECHANISMS).to_string();
        let contact_type = if mechanism == "contact" {
            pick(rng, pools::CONTACT_TYPES).to_string()
        } else {
            pools::NO_CONTACT.to_string()
        };
        let season_type = pick(rng, pools::SEASON_TYPES).to_string();
        let body_part = pick(rng, pools::BODY_PARTS).to_string();
        let participation_reason = pick(rng, pools::PARTICIPATION_REASONS).to_string();
        let clinical_impression = pick(rng, pools::CLINICAL_IMPRESSIONS).to_string();
        let position_at_injury = pick(rng, POSITIONS).to_string();
        let side = Side::all()[rng.gen_range(0..Side::all().len())];

        let is_recurring = rng.gen::<f64>() < 0.15;
        let is_past_player = rng.gen::<f64>() < 0.12;

        let opponent = opponent_for(rng, team);
        let game = format!("Week {} vs {}", week, opponent.abbreviation);
        let week_type_name =
            if week >= WEEKS_PER_SEASON { "Playoffs" } else { "Regular Season" }.to_string();

        // Derived outcome fields: thresholds only, never sampled.
        let missed_games = days_out / 7;
        let missed_time_injury = days_out > MISSED_TIME_THRESHOLD_DAYS;
        let missed_game_injury = session_type == SessionType::Games && days_out > 0;
        let missed_practice_injury = session_type == SessionType::Practice && days_out > 0;

        let roster_status = match status {
            InjuryStatus::Recovered => {
                if rng.gen::<f64>() < 0.9 {
                    RosterStatus::Active
                } else {
                    RosterStatus::PracticeSquad
                }
            }
            InjuryStatus::Out if days_out > 21 => RosterStatus::InjuredReserve,
            _ => RosterStatus::Active,
        };

        InjuryEvent {
            id: format!("INJ-{record_id}"),
            player_id,
            player_name,
            team_id: team.id,
            team_name: team.name.to_string(),
            team_abbr: team.abbreviation.to_string(),
            position: position.to_string(),
            position_group: position_group(position).to_string(),
            position_at_injury,
            injury_category,
            body_part,
            mechanism,
            contact_type,
            severity,
            side,
            clinical_impression,
            season,
            week,
            gameweek: format!("{season} Week {week}"),
            week_type_name,
            game,
            season_type,
            team_activity: session_type.activity_label().to_string(),
            session_type,
            injury_date,
            expected_return_date,
            actual_return_date,
            days_out,
            status,
            missed_games,
            missed_time_injury,
            missed_game_injury,
            missed_practice_injury,
            is_recurring,
            is_past_player,
            roster_status,
            participation_reason,
            description: format!("{} {} injury", severity.name(), injury_category.name()),
        }
    }
}

/// First day of an organization's season calendar (September 1st).
pub fn season_start(season: i32) -> NaiveDate {
    // Sep 1 exists in every year.
    NaiveDate::from_ymd_opt(season, 9, 1).expect("valid season start")
}

/// Random calendar date inside the given week's window.
fn random_date_in_week<R: Rng>(rng: &mut R, season: i32, week: u32) -> NaiveDate {
    let offset = (week - 1) * 7 + rng.gen_range(0..7);
    season_start(season) + Duration::days(offset as i64)
}

/// Uniform opponent draw among the other 31 organizations.
fn opponent_for<R: Rng>(rng: &mut R, team: &Team) -> &'static Team {
    let k = rng.gen_range(0..TEAMS.len() - 1);
    TEAMS
        .iter()
        .filter(|t| t.id != team.id)
        .nth(k)
        .expect("opponent index within remaining teams")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fixed_config(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed,
            seasons: vec![2022, 2023, 2024],
            players_per_team_per_season: 28,
            injury_rate: 0.35,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        }
    }

    #[test]
    fn same_seed_same_corpus() {
        let a = EventGenerator::new(fixed_config(42)).generate();
        let b = EventGenerator::new(fixed_config(42)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_corpus() {
        let a = EventGenerator::new(fixed_config(1)).generate();
        let b = EventGenerator::new(fixed_config(2)).generate();
        assert_ne!(a, b);
    }

    #[test]
    fn days_out_within_recovery_profile() {
        let events = EventGenerator::new(fixed_config(7)).generate();
        for event in &events {
            let profile = event.injury_category.recovery_profile();
            assert!(
                event.days_out >= profile.min_days && event.days_out <= profile.max_days,
                "{}: {} days out of [{}, {}]",
                event.injury_category.name(),
                event.days_out,
                profile.min_days,
                profile.max_days
            );
        }
    }

    #[test]
    fn derived_fields_follow_thresholds() {
        let events = EventGenerator::new(fixed_config(11)).generate();
        for event in &events {
            assert_eq!(event.missed_games, event.days_out / 7);
            assert_eq!(event.missed_time_injury, event.days_out > 3);
            assert_eq!(
                event.missed_game_injury,
                event.session_type == SessionType::Games && event.days_out > 0
            );
            assert_eq!(
                event.missed_practice_injury,
                event.session_type == SessionType::Practice && event.days_out > 0
            );
        }
    }

    #[test]
    fn injury_date_falls_inside_week_window() {
        let events = EventGenerator::new(fixed_config(13)).generate();
        for event in &events {
            let start = season_start(event.season) + Duration::days(((event.week - 1) * 7) as i64);
            let end = start + Duration::days(7);
            assert!(
                event.injury_date >= start && event.injury_date < end,
                "{} not in week {} window",
                event.injury_date,
                event.week
            );
        }
    }

    #[test]
    fn status_is_a_function_of_expected_return() {
        let config = fixed_config(17);
        let today = config.reference_date;
        let events = EventGenerator::new(config).generate();
        for event in &events {
            assert_eq!(event.expected_return_date, event.injury_date + Duration::days(event.days_out as i64));
            match event.status {
                InjuryStatus::Recovered => {
                    assert!(event.expected_return_date < today);
                    let actual = event.actual_return_date.expect("recovered has return date");
                    let delta = (actual - event.expected_return_date).num_days();
                    assert!((-3..=3).contains(&delta), "return jitter {delta}");
                }
                InjuryStatus::Limited => {
                    assert!(event.expected_return_date < today);
                    assert!(event.actual_return_date.is_none());
                }
                InjuryStatus::Out => assert!(event.actual_return_date.is_none()),
            }
        }
    }

    #[test]
    fn non_contact_mechanism_forces_no_contact_sentinel() {
        let events = EventGenerator::new(fixed_config(19)).generate();
        for event in &events {
            if event.mechanism != "contact" {
                assert_eq!(event.contact_type, "no-contact");
            }
        }
    }

    #[test]
    fn event_count_per_team_season_within_bounds() {
        let config = fixed_config(23);
        let base = config.base_events_per_team();
        let events = EventGenerator::new(config).generate();
        let mut counts: HashMap<(i32, u32), u32> = HashMap::new();
        for event in &events {
            *counts.entry((event.season, event.team_id)).or_default() += 1;
        }
        assert_eq!(counts.len(), 3 * TEAMS.len());
        for (&(season, team_id), &count) in &counts {
            assert!(
                count >= base && count < base + 5,
                "({season}, {team_id}) produced {count} events"
            );
        }
    }

    #[test]
    fn category_frequencies_converge_to_weights() {
        // Large sample: ~10 seasons x 32 teams x ~11 events ≈ 3,500.
        let config = GeneratorConfig {
            seed: 99,
            seasons: (2015..2025).collect(),
            players_per_team_per_season: 28,
            injury_rate: 0.35,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let events = EventGenerator::new(config).generate();
        let n = events.len() as f64;
        for category in InjuryCategory::all() {
            let observed =
                events.iter().filter(|e| e.injury_category == *category).count() as f64 / n;
            assert!(
                (observed - category.weight()).abs() < 0.03,
                "{}: observed {:.3}, configured {:.3}",
                category.name(),
                observed,
                category.weight()
            );
        }
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        let events = EventGenerator::new(fixed_config(29)).generate();
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.id, format!("INJ-{}", i + 1));
        }
    }
}
