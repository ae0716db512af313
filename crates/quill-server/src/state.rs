use std::sync::Arc;

use quill_blog::{Authors, Comments, Posts};
use quill_store::Database;

use crate::views::{BasicViews, ViewEngine};

/// Shared per-request state: the three repositories (each a cheap clone of
/// the one database handle) and the view engine. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub posts: Posts,
    pub authors: Authors,
    pub comments: Comments,
    pub views: Arc<dyn ViewEngine>,
}

impl AppState {
    /// State over a connected database, rendered with [`BasicViews`].
    pub fn new(db: Database) -> Self {
        Self::with_views(db, Arc::new(BasicViews))
    }

    /// State with a caller-supplied view engine.
    pub fn with_views(db: Database, views: Arc<dyn ViewEngine>) -> Self {
        Self {
            posts: Posts::new(db.clone()),
            authors: Authors::new(db.clone()),
            comments: Comments::new(db),
            views,
        }
    }
}
