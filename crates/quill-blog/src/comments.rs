use serde::Serialize;

use quill_store::{from_document, to_document, Database, Filter, Projection};
use quill_types::DocumentId;

use crate::error::BlogResult;
use crate::records::{Comment, NewComment};

/// Name of the comments collection.
pub(crate) const COMMENTS: &str = "comments";

#[derive(Serialize)]
struct NewCommentDocument {
    #[serde(rename = "postId")]
    post_id: DocumentId,
    title: String,
    text: String,
}

/// Repository over the `comments` collection, scoped by parent post.
///
/// Comments are write-once: created and listed, never updated or deleted.
/// The parent post id is trusted as given -- there is no existence check
/// against `posts`, so a comment on a since-deleted (or never-existing)
/// post inserts successfully and is simply orphaned.
#[derive(Clone, Debug)]
pub struct Comments {
    db: Database,
}

impl Comments {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Every comment whose `postId` equals the given post's identifier.
    /// No limit, natural order. Empty when the post has no comments.
    pub async fn list_for_post(&self, post_id: &str) -> BlogResult<Vec<Comment>> {
        let post_id = DocumentId::from_hex(post_id)?;
        let docs = self
            .db
            .collection(COMMENTS)
            .find(&Filter::eq("postId", post_id.to_hex()), &Projection::All)
            .await?;
        docs.into_iter()
            .map(|doc| from_document(doc).map_err(Into::into))
            .collect()
    }

    /// Insert a comment under the given post id.
    pub async fn add(&self, post_id: &str, comment: NewComment) -> BlogResult<DocumentId> {
        let post_id = DocumentId::from_hex(post_id)?;
        let document = to_document(&NewCommentDocument {
            post_id,
            title: comment.title,
            text: comment.text,
        })?;
        let id = self.db.collection(COMMENTS).insert_one(document).await?;
        tracing::info!(post = %post_id, comment = %id, "comment added");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;

    fn comment(text: &str) -> NewComment {
        NewComment {
            title: "re".into(),
            text: text.into(),
        }
    }

    #[tokio::test]
    async fn comments_are_scoped_to_their_post() {
        let comments = Comments::new(Database::in_memory("blog"));
        let first = DocumentId::generate();
        let second = DocumentId::generate();

        comments.add(&first.to_hex(), comment("a")).await.unwrap();
        comments.add(&first.to_hex(), comment("b")).await.unwrap();
        comments.add(&second.to_hex(), comment("c")).await.unwrap();

        let listed = comments.list_for_post(&first.to_hex()).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|c| c.post_id == first));

        let other = comments.list_for_post(&second.to_hex()).await.unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].text, "c");
    }

    #[tokio::test]
    async fn no_comments_is_an_empty_list() {
        let comments = Comments::new(Database::in_memory("blog"));
        let listed = comments
            .list_for_post(&DocumentId::generate().to_hex())
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn orphaned_comments_are_permitted() {
        // No post with this id exists anywhere; the insert still succeeds.
        let comments = Comments::new(Database::in_memory("blog"));
        let orphan_parent = DocumentId::generate();
        comments
            .add(&orphan_parent.to_hex(), comment("orphan"))
            .await
            .unwrap();

        let listed = comments.list_for_post(&orphan_parent.to_hex()).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn malformed_post_ids_are_rejected() {
        let comments = Comments::new(Database::in_memory("blog"));
        let err = comments.list_for_post("nope").await.unwrap_err();
        assert!(matches!(err, BlogError::InvalidIdentifier(_)));
        let err = comments.add("nope", comment("x")).await.unwrap_err();
        assert!(matches!(err, BlogError::InvalidIdentifier(_)));
    }
}
