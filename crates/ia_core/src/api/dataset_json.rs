//! JSON API for dataset generation.
//!
//! The request/response pair decouples callers from the crate's types:
//! a host passes a JSON request string and gets the full dataset back
//! as JSON. Requests carry a schema version so payload evolution stays
//! detectable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::InjuryDataset;
use crate::error::{DatasetError, Result};
use crate::generator::GeneratorConfig;
use crate::models::{ActivityLogEntry, InjuryEvent, PlayerDemographics};

/// Current request/response schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// JSON request for one dataset build. Omitted fields fall back to the
/// generator defaults.
#[derive(Debug, Deserialize)]
pub struct DatasetRequest {
    pub schema_version: u32,
    pub seed: u64,
    #[serde(default)]
    pub seasons: Option<Vec<i32>>,
    #[serde(default)]
    pub players_per_team_per_season: Option<u32>,
    #[serde(default)]
    pub injury_rate: Option<f64>,
    /// Observation date; defaults to the current date when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Headline figures for a generated dataset.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub seed: u64,
    pub seasons: Vec<i32>,
    pub event_count: usize,
    pub activity_entry_count: usize,
    pub player_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetResponse {
    pub schema_version: u32,
    pub summary: DatasetSummary,
    pub events: Vec<InjuryEvent>,
    pub activity_log: Vec<ActivityLogEntry>,
    pub demographics: Vec<PlayerDemographics>,
}

impl DatasetRequest {
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::with_seed(self.seed);
        if let Some(seasons) = self.seasons {
            if seasons.is_empty() {
                return Err(DatasetError::InvalidParameter("seasons must be non-empty".into()));
            }
            config.seasons = seasons;
        }
        if let Some(players) = self.players_per_team_per_season {
            config.players_per_team_per_season = players;
        }
        if let Some(rate) = self.injury_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(DatasetError::InvalidParameter(format!(
                    "injury_rate must be in [0, 1], got {rate}"
                )));
            }
            config.injury_rate = rate;
        }
        if let Some(date) = self.reference_date {
            config.reference_date = date;
        }
        Ok(config)
    }
}

/// Build a full dataset from a `DatasetRequest` JSON payload.
pub fn build_dataset_json(request_json: &str) -> Result<String> {
    let request: DatasetRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(DatasetError::UnsupportedSchemaVersion {
            expected: SCHEMA_VERSION,
            found: request.schema_version,
        });
    }

    let config = request.into_config()?;
    let seed = config.seed;
    let seasons = config.seasons.clone();
    let dataset = InjuryDataset::generate(config);

    let response = DatasetResponse {
        schema_version: SCHEMA_VERSION,
        summary: DatasetSummary {
            seed,
            seasons,
            event_count: dataset.events().len(),
            activity_entry_count: dataset.activity_log().len(),
            player_count: dataset.demographics().len(),
        },
        events: dataset.events().to_vec(),
        activity_log: dataset.activity_log().to_vec(),
        demographics: {
            let mut profiles: Vec<PlayerDemographics> =
                dataset.demographics().values().cloned().collect();
            profiles.sort_by(|a, b| a.player_name.cmp(&b.player_name));
            profiles
        },
    };

    info!(events = response.summary.event_count, seed, "dataset response built");
    Ok(serde_json::to_string(&response)?)
}
