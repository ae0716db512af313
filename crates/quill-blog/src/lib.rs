//! Domain layer for the Quill blog.
//!
//! Three repositories over the document store, one per collection:
//!
//! - [`Posts`] -- create/read/update/delete over `posts`, including the
//!   projection rules for list, detail, and edit views and the
//!   author-snapshot embedding policy
//! - [`Authors`] -- read-only access to `authors`, plus startup seeding
//! - [`Comments`] -- per-post comment reads and writes over `comments`
//!
//! Repositories hold a cheap [`Database`](quill_store::Database) clone and
//! no other state; every operation is one store round trip. External
//! identifier strings are decoded before any query is issued, so a
//! malformed id never reaches the store layer.

pub mod authors;
pub mod comments;
pub mod error;
pub mod posts;
pub mod records;

pub use authors::Authors;
pub use comments::Comments;
pub use error::{BlogError, BlogResult};
pub use posts::Posts;
pub use records::{
    Author, AuthorName, AuthorSnapshot, Comment, EditablePost, NewAuthor, NewComment, Post,
    PostDraft, PostEdit, PostSummary,
};
