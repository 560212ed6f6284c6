//! Generation parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters for one corpus generation run.
///
/// Identical configs (including `seed` and `reference_date`) produce
/// identical corpora. The reference date replaces the wall clock in
/// status resolution so fixtures stay stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// RNG seed for every sampling step.
    pub seed: u64,
    /// Seasons to generate, as calendar years.
    pub seasons: Vec<i32>,
    /// Tracked roster size per organization per season.
    pub players_per_team_per_season: u32,
    /// Probability that a tracked player sustains an injury in a season.
    pub injury_rate: f64,
    /// "Now" for status resolution and age derivation.
    pub reference_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            seasons: vec![2022, 2023, 2024, 2025, 2026],
            players_per_team_per_season: 28,
            injury_rate: 0.35,
            reference_date: default_reference_date(),
        }
    }
}

impl GeneratorConfig {
    /// Config with an explicit seed and the default shape parameters.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Expected events per (season, organization) before the random
    /// 0..5 surplus.
    pub fn base_events_per_team(&self) -> u32 {
        (self.players_per_team_per_season as f64 * self.injury_rate).floor() as u32
    }
}

fn default_reference_date() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_shape() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seasons.len(), 5);
        assert_eq!(config.players_per_team_per_season, 28);
        // floor(28 * 0.35) = 9
        assert_eq!(config.base_events_per_team(), 9);
    }

    #[test]
    fn with_seed_overrides_only_the_seed() {
        let config = GeneratorConfig::with_seed(42);
        assert_eq!(config.seed, 42);
        assert_eq!(config.injury_rate, GeneratorConfig::default().injury_rate);
    }
}
