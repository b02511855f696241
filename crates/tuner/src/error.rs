use thiserror::Error;

#[derive(Debug, Error)]
pub enum TunerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse tuner config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid tuner parameter: {0}")]
    InvalidParameter(String),
}
