use std::path::PathBuf;

/// All errors that can be returned while generating or writing a payload.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The output could not be created, written, flushed or moved into place.
    #[error("cannot write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The base timestamp was unparsable or a record timestamp left the
    /// representable date range.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SeedError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SeedError::Io { .. } => "io",
            SeedError::Serialize(_) => "serialize",
            SeedError::Timestamp(_) => "timestamp",
            SeedError::Config(_) => "config",
        }
    }

    /// Serialize to the JSON object printed by `--output json`.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "kind":  self.kind(),
        })
    }
}
