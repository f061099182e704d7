use plan_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("cannot parse time '{0}'")]
    InvalidTime(String),
    #[error("no pending task candidate")]
    NothingPending,
    #[error("no JSON object found in reply")]
    NoJsonObject,
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}
