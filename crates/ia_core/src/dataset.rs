//! Dataset facade.
//!
//! `InjuryDataset` owns one generated corpus: the event list and the
//! demographics map are built eagerly at construction, the activity
//! log is expanded lazily on first access and memoized. Filter
//! accessors return owned snapshots so callers can hold results
//! without borrowing the dataset.

use chrono::NaiveDate;
use fxhash::FxHashMap;
use once_cell::sync::OnceCell;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::generator::{activity_log, demographics, EventGenerator, GeneratorConfig};
use crate::models::{
    ActivityLogEntry, InjuryCategory, InjuryEvent, InjuryStatus, PlayerDemographics, SessionType,
};

/// Stream constant separating the demographics RNG from the event RNG
/// derived from the same seed.
const DEMOGRAPHICS_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// A fully generated synthetic injury corpus and its derived views.
pub struct InjuryDataset {
    config: GeneratorConfig,
    events: Vec<InjuryEvent>,
    demographics: FxHashMap<String, PlayerDemographics>,
    activity_log: OnceCell<Vec<ActivityLogEntry>>,
}

impl InjuryDataset {
    /// Generate a corpus from a config. The same config always yields
    /// an identical dataset.
    pub fn generate(config: GeneratorConfig) -> Self {
        let events = EventGenerator::new(config.clone()).generate();

        let mut demo_rng = ChaCha8Rng::seed_from_u64(config.seed ^ DEMOGRAPHICS_STREAM);
        let demographics = demographics::synthesize(&events, config.reference_date, &mut demo_rng);

        info!(
            events = events.len(),
            players = demographics.len(),
            seed = config.seed,
            "dataset generated"
        );

        Self { config, events, demographics, activity_log: OnceCell::new() }
    }

    /// Convenience constructor with default parameters and a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::generate(GeneratorConfig::with_seed(seed))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The full event corpus, in generation order.
    pub fn events(&self) -> &[InjuryEvent] {
        &self.events
    }

    /// The expanded activity log. Built on first access, then reused.
    pub fn activity_log(&self) -> &[ActivityLogEntry] {
        self.activity_log.get_or_init(|| activity_log::expand(&self.events))
    }

    /// Demographics keyed by player name.
    pub fn demographics(&self) -> &FxHashMap<String, PlayerDemographics> {
        &self.demographics
    }

    pub fn player_demographics(&self, player_name: &str) -> Option<&PlayerDemographics> {
        self.demographics.get(player_name)
    }

    fn filter(&self, pred: impl Fn(&InjuryEvent) -> bool) -> Vec<InjuryEvent> {
        self.events.iter().filter(|e| pred(e)).cloned().collect()
    }

    /// Events for one organization. Unknown ids yield an empty list.
    pub fn injuries_by_team(&self, team_id: u32) -> Vec<InjuryEvent> {
        self.filter(|e| e.team_id == team_id)
    }

    pub fn injuries_by_season(&self, season: i32) -> Vec<InjuryEvent> {
        self.filter(|e| e.season == season)
    }

    pub fn injuries_by_team_and_season(&self, team_id: u32, season: i32) -> Vec<InjuryEvent> {
        self.filter(|e| e.team_id == team_id && e.season == season)
    }

    pub fn injuries_by_category(&self, category: InjuryCategory) -> Vec<InjuryEvent> {
        self.filter(|e| e.injury_category == category)
    }

    pub fn injuries_by_status(&self, status: InjuryStatus) -> Vec<InjuryEvent> {
        self.filter(|e| e.status == status)
    }

    pub fn injuries_by_session_type(&self, session_type: SessionType) -> Vec<InjuryEvent> {
        self.filter(|e| e.session_type == session_type)
    }

    pub fn injuries_by_position(&self, position: &str) -> Vec<InjuryEvent> {
        self.filter(|e| e.position == position)
    }

    pub fn injuries_by_position_group(&self, group: &str) -> Vec<InjuryEvent> {
        self.filter(|e| e.position_group == group)
    }

    /// Events whose injury date falls in `[start, end]`, inclusive.
    pub fn injuries_in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<InjuryEvent> {
        self.filter(|e| e.injury_date >= start && e.injury_date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TEAMS;

    fn dataset() -> InjuryDataset {
        let config = GeneratorConfig {
            seed: 42,
            seasons: vec![2023, 2024],
            players_per_team_per_season: 28,
            injury_rate: 0.35,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        InjuryDataset::generate(config)
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = dataset();
        let b = dataset();
        assert_eq!(a.events(), b.events());
        assert_eq!(a.activity_log(), b.activity_log());
        assert_eq!(a.demographics(), b.demographics());
    }

    #[test]
    fn different_seeds_differ() {
        let a = InjuryDataset::with_seed(1);
        let b = InjuryDataset::with_seed(2);
        assert_ne!(a.events(), b.events());
    }

    #[test]
    fn activity_log_is_memoized() {
        let data = dataset();
        let first = data.activity_log().as_ptr();
        let second = data.activity_log().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn every_event_player_has_demographics() {
        let data = dataset();
        for event in data.events() {
            assert!(
                data.player_demographics(&event.player_name).is_some(),
                "missing demographics for {}",
                event.player_name
            );
        }
    }

    #[test]
    fn team_filter_partitions_the_corpus() {
        let data = dataset();
        let total: usize = TEAMS.iter().map(|t| data.injuries_by_team(t.id).len()).sum();
        assert_eq!(total, data.events().len());
        assert!(data.injuries_by_team(999).is_empty());
    }

    #[test]
    fn season_filter_matches_config() {
        let data = dataset();
        let total =
            data.injuries_by_season(2023).len() + data.injuries_by_season(2024).len();
        assert_eq!(total, data.events().len());
        assert!(data.injuries_by_season(1999).is_empty());
    }

    #[test]
    fn date_range_filter_is_inclusive() {
        let data = dataset();
        let event = &data.events()[0];
        let hits = data.injuries_in_date_range(event.injury_date, event.injury_date);
        assert!(hits.iter().any(|e| e.id == event.id));
    }

    #[test]
    fn unknown_filter_values_return_empty() {
        let data = dataset();
        assert!(data.injuries_by_position("XX").is_empty());
        assert!(data.injuries_by_position_group("Nowhere").is_empty());
    }
}
