use std::fmt;

#[derive(Debug)]
pub enum DatasetError {
    InvalidParameter(String),
    NotFound(String),
    UnsupportedSchemaVersion { expected: u32, found: u32 },
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            DatasetError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DatasetError::UnsupportedSchemaVersion { expected, found } => {
                write!(f, "Unsupported schema version: expected {}, found {}", expected, found)
            }
            DatasetError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            DatasetError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            DatasetError::DeserializationError(err.to_string())
        } else {
            DatasetError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
