use chrono::Utc;
use serde::Serialize;

use quill_store::{from_document, to_document, Database, Filter, Projection};
use quill_types::DocumentId;

use crate::authors::AUTHORS;
use crate::error::{BlogError, BlogResult};
use crate::records::{AuthorSnapshot, EditablePost, Post, PostDraft, PostEdit, PostSummary};

/// Name of the posts collection.
pub(crate) const POSTS: &str = "posts";

/// A new post document as inserted: creation stamps the date and embeds the
/// author snapshot; the store assigns the id.
#[derive(Serialize)]
struct NewPostDocument {
    title: String,
    summary: String,
    body: String,
    date: chrono::DateTime<Utc>,
    author: AuthorSnapshot,
}

/// Repository over the `posts` collection.
#[derive(Clone, Debug)]
pub struct Posts {
    db: Database,
}

impl Posts {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All posts projected down to `{title, summary, author.name}` for the
    /// list view; body and date stay in the store. Natural order, not
    /// guaranteed stable across calls.
    pub async fn list_summaries(&self) -> BlogResult<Vec<PostSummary>> {
        let docs = self
            .db
            .collection(POSTS)
            .find(
                &Filter::All,
                &Projection::include(["title", "summary", "author.name"]),
            )
            .await?;
        docs.into_iter()
            .map(|doc| from_document(doc).map_err(Into::into))
            .collect()
    }

    /// A single post for the detail view, excluding `summary`.
    pub async fn get(&self, id: &str) -> BlogResult<Post> {
        let id = DocumentId::from_hex(id)?;
        let doc = self
            .db
            .collection(POSTS)
            .find_one(&Filter::Id(id), &Projection::exclude(["summary"]))
            .await?
            .ok_or(BlogError::NotFound)?;
        Ok(from_document(doc)?)
    }

    /// A single post's mutable fields, for pre-filling the edit form.
    pub async fn get_for_edit(&self, id: &str) -> BlogResult<EditablePost> {
        let id = DocumentId::from_hex(id)?;
        let doc = self
            .db
            .collection(POSTS)
            .find_one(
                &Filter::Id(id),
                &Projection::include(["title", "summary", "body"]),
            )
            .await?
            .ok_or(BlogError::NotFound)?;
        Ok(from_document(doc)?)
    }

    /// Create a post: resolve the referenced author, stamp the date, embed
    /// the author snapshot, insert. Fails with [`BlogError::UnknownAuthor`]
    /// when the author id resolves to nothing.
    pub async fn create(&self, draft: PostDraft) -> BlogResult<DocumentId> {
        let author_id = DocumentId::from_hex(&draft.author)?;
        let author_doc = self
            .db
            .collection(AUTHORS)
            .find_one(&Filter::Id(author_id), &Projection::All)
            .await?
            .ok_or(BlogError::UnknownAuthor(author_id))?;
        let author: crate::records::Author = from_document(author_doc)?;

        let post = NewPostDocument {
            title: draft.title,
            summary: draft.summary,
            body: draft.body,
            date: Utc::now(),
            author: AuthorSnapshot {
                id: author.id,
                name: author.name,
                email: author.email,
            },
        };
        let id = self
            .db
            .collection(POSTS)
            .insert_one(to_document(&post)?)
            .await?;
        tracing::info!(post = %id, "post created");
        Ok(id)
    }

    /// Overwrite the three mutable fields with exactly the supplied values,
    /// empty strings included. `date` and `author` are immutable after
    /// creation and stay untouched.
    pub async fn update(&self, id: &str, edit: PostEdit) -> BlogResult<()> {
        let id = DocumentId::from_hex(id)?;
        let matched = self
            .db
            .collection(POSTS)
            .update_one(&Filter::Id(id), to_document(&edit)?)
            .await?;
        if !matched {
            return Err(BlogError::NotFound);
        }
        tracing::info!(post = %id, "post updated");
        Ok(())
    }

    /// Remove the post document. Comments under the post are left in place
    /// (see the orphaned-comments note in DESIGN.md).
    pub async fn delete(&self, id: &str) -> BlogResult<()> {
        let id = DocumentId::from_hex(id)?;
        let removed = self
            .db
            .collection(POSTS)
            .delete_one(&Filter::Id(id))
            .await?;
        if !removed {
            return Err(BlogError::NotFound);
        }
        tracing::info!(post = %id, "post deleted");
        Ok(())
    }
}
