use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single fetch-and-load unit. The category groups variants
/// the way they show up in per-symbol log lines.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("request failed with status {0}")]
    Api(StatusCode),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Time(#[from] chrono::ParseError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl LoadError {
    pub fn category(&self) -> &'static str {
        match self {
            LoadError::Network(_) | LoadError::Api(_) => "network",
            LoadError::Json(_) | LoadError::Time(_) => "parse",
            LoadError::Database(_) => "database",
        }
    }
}
