pub mod dataset_json;

pub use dataset_json::{
    build_dataset_json, DatasetRequest, DatasetResponse, DatasetSummary, SCHEMA_VERSION,
};
