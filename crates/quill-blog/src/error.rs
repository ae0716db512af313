use thiserror::Error;

use quill_store::StoreError;
use quill_types::{DocumentId, IdError};

/// Errors from blog repository operations.
#[derive(Debug, Error)]
pub enum BlogError {
    /// An external id string is not a well-formed identifier. Raised before
    /// any store query; the addressed resource cannot exist.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdError),

    /// A well-formed id matched no document.
    #[error("no matching document")]
    NotFound,

    /// Post creation referenced an author that does not exist.
    #[error("unknown author: {0}")]
    UnknownAuthor(DocumentId),

    /// Transport or query failure in the store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for blog repository operations.
pub type BlogResult<T> = Result<T, BlogError>;
