//! # ia_core - Deterministic Synthetic Injury Dataset Engine
//!
//! This library generates a reproducible synthetic sports-injury corpus
//! and exposes aggregation queries over it, with a JSON API for easy
//! integration with dashboards and host applications.
//!
//! ## Features
//! - 100% deterministic generation (same seed = same dataset)
//! - Weighted sampling across injury categories, severities and sessions
//! - Missed-time rollups, standings, benchmarks and player stat lines
//! - JSON API for easy integration

pub mod analysis;
pub mod api;
pub mod data;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod models;

// Re-export main API functions
pub use api::{build_dataset_json, DatasetRequest, DatasetResponse, DatasetSummary};
pub use error::{DatasetError, Result};

// Re-export the dataset facade and generator config
pub use dataset::InjuryDataset;
pub use generator::{EventGenerator, GeneratorConfig, WeightedTable};

// Re-export core model types
pub use models::{
    ActivityKind, ActivityLogEntry, InjuryCategory, InjuryEvent, InjuryStatus, PlayerDemographics,
    RecoveryProfile, Severity, SessionType, MISSED_TIME_THRESHOLD_DAYS,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u32 = api::SCHEMA_VERSION;
