//! Corpus generation: weighted stochastic event synthesis, activity
//! log expansion and demographic synthesis.

pub mod activity_log;
pub mod config;
pub mod demographics;
pub mod events;
pub mod sampler;

pub use config::GeneratorConfig;
pub use events::{season_start, EventGenerator};
pub use sampler::WeightedTable;
