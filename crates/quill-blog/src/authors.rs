use quill_store::{from_document, to_document, Database, Filter, Projection};
use quill_types::DocumentId;

use crate::error::BlogResult;
use crate::records::{Author, NewAuthor};

/// Name of the authors collection.
pub(crate) const AUTHORS: &str = "authors";

/// Read-only repository over the `authors` collection.
///
/// No create/update/delete operation is exposed beyond startup seeding;
/// authors exist before any post does.
#[derive(Clone, Debug)]
pub struct Authors {
    db: Database,
}

impl Authors {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Every author, for the post-creation form. Natural order.
    pub async fn all(&self) -> BlogResult<Vec<Author>> {
        let docs = self
            .db
            .collection(AUTHORS)
            .find(&Filter::All, &Projection::All)
            .await?;
        docs.into_iter()
            .map(|doc| from_document(doc).map_err(Into::into))
            .collect()
    }

    /// The author with this identifier, if any.
    pub async fn get(&self, id: DocumentId) -> BlogResult<Option<Author>> {
        let doc = self
            .db
            .collection(AUTHORS)
            .find_one(&Filter::Id(id), &Projection::All)
            .await?;
        doc.map(|doc| from_document(doc).map_err(Into::into))
            .transpose()
    }

    /// Seed the collection at startup. Inserts nothing when any author
    /// already exists, so restarting against a populated store is safe.
    /// Returns the number of authors inserted.
    pub async fn seed(&self, entries: &[NewAuthor]) -> BlogResult<usize> {
        let collection = self.db.collection(AUTHORS);
        let existing = collection.find(&Filter::All, &Projection::All).await?;
        if !existing.is_empty() {
            return Ok(0);
        }
        for entry in entries {
            collection.insert_one(to_document(entry)?).await?;
        }
        if !entries.is_empty() {
            tracing::info!(count = entries.len(), "seeded authors");
        }
        Ok(entries.len())
    }
}
