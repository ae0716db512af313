use async_trait::async_trait;

use quill_types::DocumentId;

use crate::document::Document;
use crate::error::StoreResult;
use crate::filter::Filter;
use crate::projection::Projection;

/// A document store backend.
///
/// Each method is a single round trip against one named collection and a
/// suspension point for the calling task. Implementations must provide
/// single-document atomicity for the write operations; nothing here spans
/// more than one document. Errors are propagated as-is -- no retries.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents matching the filter, shaped by the projection.
    ///
    /// Order is the store's natural order and is not guaranteed stable
    /// across calls.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: &Projection,
    ) -> StoreResult<Vec<Document>>;

    /// The first document matching the filter, shaped by the projection,
    /// or `None` when nothing matches.
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
        projection: &Projection,
    ) -> StoreResult<Option<Document>>;

    /// Insert one document, assigning a fresh `_id` when the document does
    /// not carry a well-formed one, and return its identifier.
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<DocumentId>;

    /// Merge the top-level fields of `set` into the first document matching
    /// the filter. Returns `true` when a document matched.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> StoreResult<bool>;

    /// Remove the first document matching the filter. Returns `true` when a
    /// document was removed.
    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<bool>;
}
