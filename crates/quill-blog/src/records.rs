//! The stored record shapes: posts, authors, comments, and the projected
//! sub-shapes each view reads.
//!
//! Field names follow the stored documents (`_id`, `postId`); each read
//! shape mirrors exactly the projection its repository operation uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_types::DocumentId;

/// A post as the detail view reads it: everything except `summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub body: String,
    /// Stamped at creation, never changed by edit.
    pub date: DateTime<Utc>,
    pub author: AuthorSnapshot,
}

/// A post as the list view reads it: `{title, summary, author.name}`.
/// Body and date are deliberately excluded to keep the list lean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub summary: String,
    pub author: AuthorName,
}

/// A post as the edit form reads it: the three mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditablePost {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub title: String,
    pub summary: String,
    pub body: String,
}

/// Input to post creation. `author` is the external author id string as
/// submitted by the form; it is decoded and resolved during creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub author: String,
}

/// Input to post editing: the three mutable fields, overwritten as given
/// (empty strings included).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostEdit {
    pub title: String,
    pub summary: String,
    pub body: String,
}

/// An author record. Read-only from the blog's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    pub email: String,
}

/// Seed input for the `authors` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
}

/// The author fields copied into a post at creation time. A snapshot, not a
/// live reference: later author changes do not alter existing posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
}

/// Just the author name, as projected into list entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorName {
    pub name: String,
}

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(rename = "postId")]
    pub post_id: DocumentId,
    pub title: String,
    pub text: String,
}

/// Input to comment creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub title: String,
    pub text: String,
}
