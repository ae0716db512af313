/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store was accessed before a connection was established.
    /// Fatal at startup: nothing can proceed without a connection.
    #[error("store connection not established")]
    NotConnected,

    /// `connect` was called on a handle that already holds a connection.
    #[error("store connection already established")]
    AlreadyConnected,

    /// The configured endpoint names a backend this build does not support.
    #[error("unsupported store endpoint: {0}")]
    Unsupported(String),

    /// A document could not be converted to or from its typed form.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Transport or query failure in the underlying backend.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
