use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("registrant not found")]
    NotFound,

    #[error("all teams at capacity")]
    CapacityExhausted,

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True for errors a caller handles as part of normal operation, as
    /// opposed to infrastructure failures.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            StorageError::NotFound | StorageError::CapacityExhausted
        )
    }
}
