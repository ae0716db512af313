use tokio::net::TcpListener;

use quill_blog::Authors;
use quill_store::StoreHandle;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::state::AppState;

/// The Quill blog server.
pub struct BlogServer {
    config: ServerConfig,
}

impl BlogServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Connect the store, seed authors, and serve requests.
    ///
    /// The store is connected exactly once here; a connection failure aborts
    /// startup by propagating to the caller.
    pub async fn serve(self) -> ServerResult<()> {
        let store = StoreHandle::new();
        store.connect(&self.config.store).await?;
        let db = store.database()?.clone();

        Authors::new(db.clone()).seed(&self.config.authors).await?;

        let app = build_router(AppState::new(db));
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("quill server listening on {}", self.config.bind_addr);
        Ok(axum::serve(listener, app).await?)
    }
}
