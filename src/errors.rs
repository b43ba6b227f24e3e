use thiserror::Error;

/// Failures while loading the persisted catalog and similarity artifacts.
///
/// A missing artifact is its own variant so that callers can degrade to a
/// disabled recommender instead of aborting. Anything that decodes but does
/// not line up is `Corrupt`.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("artifact not found: {path}")]
    DataNotFound { path: String },

    #[error("unable to read artifact")]
    Io(#[from] std::io::Error),

    #[error("artifact corrupt: {reason}")]
    Corrupt { reason: String },
}

impl DataError {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        DataError::Corrupt {
            reason: reason.into(),
        }
    }
}
