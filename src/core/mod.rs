use thiserror::Error;

/// Error types for the Hogbar preference store.
///
/// This enum represents all possible errors that can occur while reading
/// from or writing to the persistence collaborator. Ordinary mutations of
/// the in-memory snapshot never fail; these errors surface only from the
/// explicitly fallible operations (`flush`, `clear_persisted` and the
/// storage backends themselves).
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage backend rejected or failed an operation
    #[error("storage operation failed for key '{key}': {details}")]
    Storage {
        /// Key the operation was addressing
        key: String,
        /// Error details from the backend
        details: String,
    },

    /// Failed to encode or decode a persisted snapshot
    #[error("failed to {operation} persisted preferences: {details}")]
    Serialization {
        /// The codec operation that failed ("encode" or "decode")
        operation: &'static str,
        /// Serialization error details
        details: String,
    },

    /// The background persistence writer is no longer running
    #[error("persistence writer unavailable: {details}")]
    WriterUnavailable {
        /// Details about why the writer is gone
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for preference store operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `StoreError` for all store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Creates a storage error with key context.
    ///
    /// # Arguments
    ///
    /// * `key` - Key the failed operation was addressing
    /// * `error` - The underlying backend error
    pub fn storage(key: &str, error: impl std::fmt::Display) -> Self {
        StoreError::Storage {
            key: key.to_string(),
            details: error.to_string(),
        }
    }
}
