use crate::model::PostId;
use thiserror::Error;

/// Why the post list could not be loaded.
///
/// Surfaced to the user with a retry affordance; never retried automatically.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not reach {source_name}: {reason}")]
    Unreachable {
        source_name: String,
        reason: std::io::Error,
    },

    #[error("Invalid post data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate post id: {0}")]
    DuplicateId(PostId),
}

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;
