use thiserror::Error;

/// A stored row that does not decode into its domain model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("stored score {0} is negative")]
    NegativeScore(i32),
    #[error("malformed JSON list column")]
    Json(#[from] serde_json::Error),
}
