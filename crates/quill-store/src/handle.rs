use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use quill_types::DocumentId;

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;
use crate::memory::InMemoryDocumentStore;
use crate::projection::Projection;
use crate::traits::DocumentStore;

/// Store connection settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Backend endpoint; the scheme selects the backend (`memory:`).
    pub endpoint: String,
    /// Name of the logical database to select.
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "memory:".to_string(),
            database: "blog".to_string(),
        }
    }
}

/// Connect-once handle to a document store.
///
/// Constructed empty at process start, connected exactly once during
/// startup, and read-only afterwards. [`database`] fails with
/// [`StoreError::NotConnected`] until [`connect`] has completed; callers
/// treat that as fatal.
///
/// [`connect`]: StoreHandle::connect
/// [`database`]: StoreHandle::database
#[derive(Debug, Default)]
pub struct StoreHandle {
    database: OnceLock<Database>,
}

impl StoreHandle {
    /// A handle with no connection yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish the connection and select the configured logical database.
    ///
    /// A second call fails with [`StoreError::AlreadyConnected`] rather than
    /// opening another connection.
    pub async fn connect(&self, config: &StoreConfig) -> StoreResult<()> {
        let backend = open_backend(&config.endpoint)?;
        let database = Database::new(&config.database, backend);
        self.database
            .set(database)
            .map_err(|_| StoreError::AlreadyConnected)?;
        tracing::debug!(endpoint = %config.endpoint, database = %config.database, "store connected");
        Ok(())
    }

    /// The selected database, once connected.
    pub fn database(&self) -> StoreResult<&Database> {
        self.database.get().ok_or(StoreError::NotConnected)
    }
}

fn open_backend(endpoint: &str) -> StoreResult<Arc<dyn DocumentStore>> {
    match endpoint.split(':').next() {
        Some("memory") => Ok(Arc::new(InMemoryDocumentStore::new())),
        _ => Err(StoreError::Unsupported(endpoint.to_string())),
    }
}

/// One logical database inside a connected store.
///
/// Cheap to clone; clones share the backend connection.
#[derive(Clone)]
pub struct Database {
    name: Arc<str>,
    backend: Arc<dyn DocumentStore>,
}

impl Database {
    /// A database over an already-open backend.
    pub fn new(name: &str, backend: Arc<dyn DocumentStore>) -> Self {
        Self {
            name: name.into(),
            backend,
        }
    }

    /// An in-memory database, for tests and embedded use.
    pub fn in_memory(name: &str) -> Self {
        Self::new(name, Arc::new(InMemoryDocumentStore::new()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A named collection within this database.
    pub fn collection(&self, name: &str) -> Collection {
        Collection {
            name: name.to_string(),
            backend: Arc::clone(&self.backend),
        }
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("name", &self.name).finish()
    }
}

/// A named collection; forwards each operation to the backend.
#[derive(Clone)]
pub struct Collection {
    name: String,
    backend: Arc<dyn DocumentStore>,
}

impl Collection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn find(&self, filter: &Filter, projection: &Projection) -> StoreResult<Vec<Document>> {
        self.backend.find(&self.name, filter, projection).await
    }

    pub async fn find_one(
        &self,
        filter: &Filter,
        projection: &Projection,
    ) -> StoreResult<Option<Document>> {
        self.backend.find_one(&self.name, filter, projection).await
    }

    pub async fn insert_one(&self, document: Document) -> StoreResult<DocumentId> {
        self.backend.insert_one(&self.name, document).await
    }

    pub async fn update_one(&self, filter: &Filter, set: Document) -> StoreResult<bool> {
        self.backend.update_one(&self.name, filter, set).await
    }

    pub async fn delete_one(&self, filter: &Filter) -> StoreResult<bool> {
        self.backend.delete_one(&self.name, filter).await
    }
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection").field("name", &self.name).finish()
    }
}
