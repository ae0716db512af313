use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use quill_types::DocumentId;

use crate::document::{document_id, Document, ID_FIELD};
use crate::error::StoreResult;
use crate::filter::Filter;
use crate::projection::Projection;
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Collections are created on first write. Documents live in a `Vec` behind
/// a `RwLock`, so natural order happens to be insertion order here; callers
/// must not rely on that, it is not part of the [`DocumentStore`] contract.
/// Documents are cloned on read.
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents in a collection (0 when it does not exist).
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .expect("lock poisoned")
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Remove every document from every collection.
    pub fn clear(&self) {
        self.collections.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: &Projection,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().expect("lock poisoned");
        Ok(collections
            .get(collection)
            .into_iter()
            .flatten()
            .filter(|doc| filter.matches(doc))
            .map(|doc| projection.apply(doc))
            .collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
        projection: &Projection,
    ) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().expect("lock poisoned");
        Ok(collections
            .get(collection)
            .into_iter()
            .flatten()
            .find(|doc| filter.matches(doc))
            .map(|doc| projection.apply(doc)))
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> StoreResult<DocumentId> {
        let id = match document_id(&document) {
            Some(id) => id,
            None => {
                let id = DocumentId::generate();
                document.insert(ID_FIELD.into(), id.to_hex().into());
                id
            }
        };
        let mut collections = self.collections.write().expect("lock poisoned");
        collections.entry(collection.to_string()).or_default().push(document);
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> StoreResult<bool> {
        let mut collections = self.collections.write().expect("lock poisoned");
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(doc) = docs.iter_mut().find(|doc| filter.matches(doc)) else {
            return Ok(false);
        };
        for (field, value) in set {
            // `_id` is immutable.
            if field != ID_FIELD {
                doc.insert(field, value);
            }
        }
        Ok(true)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<bool> {
        let mut collections = self.collections.write().expect("lock poisoned");
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                docs.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let collections = self.collections.read().expect("lock poisoned");
        let counts: HashMap<&str, usize> = collections
            .iter()
            .map(|(name, docs)| (name.as_str(), docs.len()))
            .collect();
        f.debug_struct("InMemoryDocumentStore")
            .field("collections", &counts)
            .finish()
    }
}
