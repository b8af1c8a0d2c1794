use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored value under '{key}' has version {version}, newer than this build supports")]
    UnsupportedVersion { key: String, version: u64 },

    #[error("stored value under '{key}' is not a JSON object")]
    Malformed { key: String },

    #[error("stored value under '{key}' is not a valid report: {source}")]
    InvalidReport {
        key: String,
        source: romi_schema::SchemaError,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
